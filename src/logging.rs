use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Where swallowed failures are reported. The entry manager logs through
/// this and carries on instead of failing the whole query.
pub trait ErrorLog {
    fn error(&self, message: &str, context: &str);
}

/// Forwards to `tracing::error!`.
pub struct TracingLog;

impl ErrorLog for TracingLog {
    fn error(&self, message: &str, context: &str) {
        tracing::error!(context = %context, "{message}");
    }
}

impl<L: ErrorLog + ?Sized> ErrorLog for &L {
    fn error(&self, message: &str, context: &str) {
        (**self).error(message, context)
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn enable_logging(level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Other(format!("failed to initialize logging: {e}")))
}
