//! Tracing/logging initialization.
//!
//! Everything is written to stderr: the `stockroom` binary prints its report
//! on stdout and the two streams must not interleave.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Selects the log line format.
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Single-line human-readable output for interactive runs.
    Text,
}

impl LogFormat {
    /// Parse a `STOCKROOM_LOG_FORMAT` value; unknown values fall back to JSON.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "text" || v == "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize tracing using the format named by `STOCKROOM_LOG_FORMAT`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let setting = std::env::var(LOG_FORMAT_VAR).ok();
    init_with(LogFormat::from_setting(setting.as_deref()));
}

/// Initialize tracing with an explicit format. Filtering follows `RUST_LOG`.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().with_ansi(false).try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(LogFormat::from_setting(None), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("yaml")), LogFormat::Json);
    }

    #[test]
    fn log_format_accepts_text_aliases() {
        assert_eq!(LogFormat::from_setting(Some("text")), LogFormat::Text);
        assert_eq!(LogFormat::from_setting(Some(" Pretty ")), LogFormat::Text);
    }

    #[test]
    fn init_is_idempotent() {
        init_with(LogFormat::Text);
        init();
        ::tracing::info!("observability initialized twice without panicking");
    }
}
