use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{LineformTuiError, LineformTuiResult};

/// Installs the global subscriber. The terminal belongs to the UI, so events
/// are only recorded when a log file is given.
pub fn init(log_file: Option<&Path>) -> LineformTuiResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|e| LineformTuiError::Logging(e.to_string()))?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
