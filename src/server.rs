//! HTTP surface: serves the browser shell and the word supplier.
//!
//! The server is stateless. Game state lives entirely in whichever
//! client is playing — each browser tab (or terminal client) runs its own
//! session against the same word routes.

use crate::words::{self, SupplyError};
use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// The embedded single-page client.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Body of `GET /words/{difficulty}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResponse {
    /// The sampled batch for the requested tier.
    pub words: Vec<String>,
}

impl IntoResponse for SupplyError {
    fn into_response(self) -> Response {
        match &self {
            SupplyError::UnknownDifficulty { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}

/// Serves the page shell.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves a fresh word batch for the tier in the path.
///
/// An unrecognized tier is a client error, never a silent default.
async fn word_batch(Path(difficulty): Path<String>) -> Result<Json<WordsResponse>, SupplyError> {
    let tier = words::parse_difficulty(&difficulty).inspect_err(|e| {
        warn!(requested = %difficulty, error = %e, "Rejected word batch request");
    })?;
    let batch = words::sample(tier);
    debug!(%tier, count = batch.len(), "Serving word batch");
    Ok(Json(WordsResponse { words: batch }))
}

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/words/{difficulty}", get(word_batch))
}

/// Binds the listener and serves until the process exits.
pub async fn run(host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "Word server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
