//! Word batch fetching for the terminal client.
//!
//! Standalone mode samples straight from the local catalogs; with
//! `--server-url` the client exercises the same HTTP contract the
//! browser shell uses.

use crate::server::WordsResponse;
use crate::words::{self, Difficulty};
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// Errors completing a batch fetch.
#[derive(Debug, Display, Error, From)]
pub enum FetchError {
    /// Transport-level failure talking to the server.
    #[display("word request failed: {_0}")]
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    #[display("word server answered {code}")]
    #[from(ignore)]
    Status {
        /// The HTTP status code.
        #[error(not(source))]
        code: u16,
    },
}

/// Where the terminal client gets its word batches.
#[derive(Debug, Clone)]
pub enum WordsClient {
    /// Sample from the in-process catalogs.
    Local,
    /// Fetch from a running word server.
    Remote {
        /// Shared HTTP client.
        http: reqwest::Client,
        /// Server base URL, e.g. `http://127.0.0.1:5000`.
        base: String,
    },
}

impl WordsClient {
    /// Local sampling, or remote if a server URL was given.
    pub fn new(server_url: Option<String>) -> Self {
        match server_url {
            Some(base) => WordsClient::Remote {
                http: reqwest::Client::new(),
                base: base.trim_end_matches('/').to_string(),
            },
            None => WordsClient::Local,
        }
    }

    /// Fetches one batch for the tier.
    ///
    /// # Errors
    ///
    /// Remote fetches fail on transport errors or any non-success
    /// status; local sampling cannot fail.
    #[instrument(skip(self))]
    pub async fn fetch(&self, difficulty: Difficulty) -> Result<Vec<String>, FetchError> {
        match self {
            WordsClient::Local => Ok(words::sample(difficulty)),
            WordsClient::Remote { http, base } => {
                let url = format!("{base}/words/{difficulty}");
                debug!(%url, "Fetching word batch");
                let response = http.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(FetchError::Status {
                        code: response.status().as_u16(),
                    });
                }
                let body: WordsResponse = response.json().await?;
                Ok(body.words)
            }
        }
    }
}
