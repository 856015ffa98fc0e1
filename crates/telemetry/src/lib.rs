//! Tracing subscriber bootstrap.

use bookstore_kernel::settings::{LogFormat, TelemetrySettings};
use bookstore_kernel::{InitCtx, Module};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the filter: `RUST_LOG` first, then the configured directive.
fn env_filter(settings: &TelemetrySettings) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&settings.log_filter).map_err(|e| TelemetryError::InvalidFilter {
        filter: settings.log_filter.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber described by `settings`. Output goes to stderr.
pub fn init(settings: &TelemetrySettings) -> Result<(), TelemetryError> {
    let filter = env_filter(settings)?;

    let installed = match settings.log_format {
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))?;

    tracing::info!(
        target: "bookstore-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );
    Ok(())
}

/// Like [`init`], but a subscriber that is already installed is not an error.
pub fn try_init(settings: &TelemetrySettings) -> Result<(), TelemetryError> {
    match init(settings) {
        Ok(()) | Err(TelemetryError::Install(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Core module that brings logging up before the domain modules.
pub struct TelemetryModule;

#[async_trait::async_trait]
impl Module for TelemetryModule {
    fn name(&self) -> &'static str {
        "telemetry"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        try_init(&ctx.settings.telemetry)?;
        Ok(())
    }
}

/// Create a new instance of the telemetry module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(TelemetryModule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported() {
        let settings = TelemetrySettings {
            log_format: LogFormat::Pretty,
            log_filter: "books=loud".to_string(),
        };

        match env_filter(&settings) {
            // RUST_LOG in the test environment takes precedence.
            Ok(_) if std::env::var("RUST_LOG").is_ok() => {}
            Ok(_) => panic!("expected the filter to be rejected"),
            Err(err) => assert!(err.to_string().contains("books=loud")),
        }
    }

    #[test]
    fn repeated_initialization_is_tolerated() {
        let settings = TelemetrySettings::default();
        try_init(&settings).unwrap();
        try_init(&settings).unwrap();
    }
}
