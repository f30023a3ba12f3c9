//! Markbook Observability
//!
//! Console logging for Markbook binaries, built on `tracing-subscriber`.
//! Libraries in the workspace only emit `tracing` events; a binary calls
//! [`init_logging`] once at start-up to see them.
//!
//! # Configuration
//!
//! - `RUST_LOG`: full filter directive, takes precedence when set
//! - `LOG_LEVEL`: level for the `markbook*` crates when `RUST_LOG` is unset (default: "info")
//! - `LOG_FORMAT`: `json` for one JSON object per line, anything else for compact text
//!
//! # Examples
//!
//! ```no_run
//! markbook_observability::init_logging();
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` from the environment.
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("LOG_FORMAT").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_filter(log_level: &str) -> String {
    format!(
        "markbook={level},markbook_config={level},markbook_cli={level}",
        level = log_level
    )
}

/// Initialize console logging. Output goes to stderr so stdout stays clean for results.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = match LogFormat::from_env() {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Compact);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Compact);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("debug"),
            "markbook=debug,markbook_config=debug,markbook_cli=debug"
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
