//! Client for the application's `/chatbot` endpoint.
//!
//! The endpoint takes `{"query": "..."}` and answers with the generated
//! response plus the retrieved chunks it was based on. Only transport
//! concerns live here; what the chunks contain is up to the service.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, error, info, trace};

#[derive(Error, Debug)]
pub enum ChatbotError {
    /// The request could not be sent or the body could not be read.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// A 200 response whose body is not the expected JSON object.
    #[error("Invalid chatbot response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ChatQuery<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Retrieved context, passed through untouched.
    pub top_related_chunks: serde_json::Value,
}

/// Result of one round trip that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Answer(ChatReply),
    /// Any status other than 200, with the raw response body.
    Failed { status: StatusCode, body: String },
}

pub struct ChatbotClient {
    client: Client,
    endpoint: Url,
}

impl ChatbotClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `query` to the endpoint and classify the response.
    pub async fn ask(&self, query: &str) -> Result<ChatOutcome, ChatbotError> {
        trace!("Entering ask function");
        debug!("Chatbot query: {}", query);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatQuery { query })
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;
        debug!("Chatbot answered with status {}", status);

        if status != StatusCode::OK {
            info!("Chatbot returned non-success status {}", status);
            return Ok(ChatOutcome::Failed { status, body });
        }

        let reply: ChatReply = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode chatbot response: {}", e);
            e
        })?;
        Ok(ChatOutcome::Answer(reply))
    }

    fn transport_error(&self, source: reqwest::Error) -> ChatbotError {
        error!("Request to {} failed: {}", self.endpoint, source);
        ChatbotError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }
}

/// Print an outcome the way the smoke test reports it: the response text
/// and the chunks on separate lines, or `Error: <status> - <body>`.
///
/// Structured chunks are rendered as compact JSON; a plain string chunk is
/// printed as-is.
pub fn write_outcome<W: Write>(outcome: &ChatOutcome, out: &mut W) -> std::io::Result<()> {
    match outcome {
        ChatOutcome::Answer(reply) => {
            writeln!(out, "{}", reply.response)?;
            match &reply.top_related_chunks {
                // Bare text, without JSON quoting
                serde_json::Value::String(chunk) => writeln!(out, "{}", chunk),
                chunks => writeln!(out, "{}", chunks),
            }
        }
        ChatOutcome::Failed { status, body } => {
            writeln!(out, "Error: {} - {}", status.as_u16(), body)
        }
    }
}
