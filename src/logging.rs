use std::sync::Once;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "tic=info";

/// Which subscriber to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines
    Development,
    /// JSON lines
    Production,
}

static INIT_ONCE: Once = Once::new();

/// Install the global tracing subscriber. Later calls are no-ops.
///
/// `RUST_LOG` overrides the default `tic=info` filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}
