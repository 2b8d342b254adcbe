//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`); the output format from
//! `SOLID_LOG_FORMAT`.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "SOLID_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name (case-insensitive). Returns `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }

    /// Resolve an optional raw setting.
    ///
    /// Unknown values fall back to JSON and are handed back so they can be
    /// reported once a subscriber is installed.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<String>) {
        match raw {
            None => (Self::Json, None),
            Some(raw) => match Self::parse(raw) {
                Some(format) => (format, None),
                None => (Self::Json, Some(raw.to_string())),
            },
        }
    }

    /// Read `SOLID_LOG_FORMAT`. See [`LogFormat::resolve`].
    pub fn from_env() -> (Self, Option<String>) {
        let raw = std::env::var(LOG_FORMAT_ENV).ok();
        Self::resolve(raw.as_deref())
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

/// Initialize from the environment, then report a rejected format setting.
pub fn init_from_env() {
    let (format, rejected) = LogFormat::from_env();
    init(format);
    if let Some(raw) = rejected {
        warn_rejected_format(&raw);
    }
}

fn warn_rejected_format(raw: &str) {
    tracing::warn!(value = %raw, "{LOG_FORMAT_ENV} is not one of json|pretty; using json");
}
