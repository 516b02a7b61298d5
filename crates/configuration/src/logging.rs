use crate::error::ConfigError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when `RUST_LOG` is unset. Order acceptance and archive toggles log at `info`.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. [`DEFAULT_LOG_DIRECTIVE`]) applies.
pub fn init_tracing(default_directive: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
