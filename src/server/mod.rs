//! HTTP surface exposed to the tool's own UI: two POST endpoints, one for
//! bible generation and one for lead capture.

mod error;
mod handlers;
mod router;
mod state;

pub use router::build_router;
pub use state::{AppState, SharedState};

use anyhow::{Context, Result};
use log::info;

/// Bind and serve until ctrl-c.
pub async fn run(bind_addr: &str, state: SharedState) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
