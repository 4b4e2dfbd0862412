use anyhow::{Context, Result};
use axum::{Router, extract::State, response::Html, routing::get};
use chrono::Utc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::dates::LabeledDate;
use crate::page;

/// Read-only data shared by every request.
#[derive(Clone)]
pub struct AppState {
    dates: Arc<[LabeledDate]>,
}

impl AppState {
    pub fn new(dates: Vec<LabeledDate>) -> Self {
        Self {
            dates: dates.into(),
        }
    }

    pub fn dates(&self) -> &[LabeledDate] {
        &self.dates
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(get_tic)).with_state(state)
}

/// GET /
async fn get_tic(State(state): State<AppState>) -> Html<String> {
    let entries = page::entries(state.dates(), Utc::now());
    debug!(entries = entries.len(), "rendering page");
    Html(page::render(&entries))
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, dates = state.dates().len(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
