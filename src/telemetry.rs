use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::TelemetryError;

/// Picks the log filter: a non-blank `RUST_LOG` directive wins, otherwise the
/// configured `MAVERICK_LOG_LEVEL`.
pub fn log_filter(rust_log: Option<&str>, config: &AppConfig) -> Result<EnvFilter, TelemetryError> {
    let directive = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(config.log_level.as_str());

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::EnvFilter {
        value: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber. Logs go to stderr so report and
/// recommendation output on stdout stays clean.
pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> AppConfig {
        AppConfig {
            log_level: level.to_string(),
            database_url: None,
        }
    }

    #[test]
    fn configured_level_is_used_without_rust_log() {
        assert!(log_filter(None, &config("debug")).is_ok());
        assert!(log_filter(Some("  "), &config("warn")).is_ok());
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        assert!(log_filter(Some("maverick_forge_insights=trace"), &config("maverick=verbose")).is_ok());
    }

    #[test]
    fn bad_directive_names_the_value() {
        let err = log_filter(None, &config("info,maverick=verbose")).expect_err("unknown level");
        match err {
            TelemetryError::EnvFilter { value, .. } => assert_eq!(value, "info,maverick=verbose"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
