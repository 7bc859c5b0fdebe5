use anyhow::{Context, Result};
use reqwest::Url;
use tracing::{debug, info, trace};

use crate::chatbot::{ChatbotClient, write_outcome};

pub async fn chat(url: Url, query: &str) -> Result<()> {
    trace!("Entering chat function");
    let client = ChatbotClient::new(url);
    info!("Querying chatbot at {}", client.endpoint());
    debug!("Query: {}", query);

    let outcome = client.ask(query).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_outcome(&outcome, &mut out).context("Failed to write chatbot output")?;
    Ok(())
}
