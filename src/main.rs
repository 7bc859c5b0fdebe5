use anyhow::Result;
use clap::Parser;

mod chatbot;
mod cli;
mod config;
mod seed;
#[cfg(test)]
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    model::init_tracing();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
