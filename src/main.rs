mod config;
mod dates;
mod diff;
mod format;
mod logging;
mod page;
mod server;

use anyhow::{Context, Result};
use config::Config;
use server::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_profile);

    // Dates to count from
    let dates = dates::meaningful_dates()?;
    let state = AppState::new(dates);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    server::serve(listener, state).await
}
