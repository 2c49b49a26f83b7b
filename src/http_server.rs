//! HTTP server for blogsmith.
//!
//! This module provides the JSON endpoint the browser form posts to. Each
//! request is handled independently and synchronously to completion; there is
//! no shared state between requests.

use axum::{body::Bytes, response::Json, routing::post, Router};
use rand::thread_rng;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Error, Result};
use crate::generator::{self, PostLength, Tone};
use crate::types::{BlogPost, GenerateRequest};

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/api/generate", post(handle_generate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str) -> Result<()> {
    let app = router();

    info!("Starting blogsmith HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `POST /api/generate`
///
/// The body is decoded here rather than through the `Json` extractor so that
/// malformed JSON surfaces as a 500 generation failure, keeping the two-member
/// error taxonomy: missing topic is the only client error.
async fn handle_generate(body: Bytes) -> Result<Json<BlogPost>> {
    let request: GenerateRequest = serde_json::from_slice(&body)?;

    if request.topic.trim().is_empty() {
        return Err(Error::Validation("Topic is required".to_string()));
    }

    let tone = Tone::parse(request.tone.as_deref());
    let length = PostLength::parse(request.length.as_deref());

    info!(
        "Generating post: topic='{}' tone={} target={}",
        request.topic,
        tone.name(),
        length.target_words()
    );

    let post = generator::generate_post(&request.topic, tone, length, &mut thread_rng());

    Ok(Json(post))
}
