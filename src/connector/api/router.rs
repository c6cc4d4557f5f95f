use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::post;
use axum::Router;
use tracing::info;

use super::controller::{analyze_image, chat};
use super::Container;

/// Build the HTTP surface: one route per endpoint, shared container state.
pub fn router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/analyze-image", post(analyze_image))
        .with_state(container)
}

/// Bind and serve until the process is stopped. Each request is handled
/// independently by the runtime's dispatcher; nothing is shared mutably
/// between concurrent requests.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, router(container)).await?;
    Ok(())
}
