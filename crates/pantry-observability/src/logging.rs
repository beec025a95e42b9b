//! Structured logging setup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

/// Log level for structured logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::InvalidLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// Logging errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// The `[logging]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self { level, format }
    }

    /// Raise the level to at least `debug`.
    pub fn verbose(mut self) -> Self {
        self.level = self.level.min(LogLevel::Debug);
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the event filter. A non-empty `env_directives` (normally
    /// `RUST_LOG`) replaces the configured level.
    pub fn filter(&self, env_directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
        match env_directives.map(str::trim).filter(|d| !d.is_empty()) {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|e| LoggingError::InvalidFilter(e.to_string())),
            None => Ok(EnvFilter::new(format!(
                "{},hyper=warn,reqwest=warn,rustls=warn",
                self.level.as_filter()
            ))),
        }
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = config.filter(env.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                subscriber_fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Human => registry
            .with(
                subscriber_fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_verbose_never_lowers_detail() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, LogLevel::Debug);

        let trace = LoggingConfig::new(LogLevel::Trace, LogFormat::Human).verbose();
        assert_eq!(trace.level, LogLevel::Trace);
    }

    #[test]
    fn test_filter_prefers_env() {
        let config = LoggingConfig::new(LogLevel::Warn, LogFormat::Human);
        let configured = config.filter(None).unwrap().to_string();
        assert!(configured.contains("hyper=warn"));
        assert!(config.filter(Some("  ")).unwrap().to_string().contains("hyper=warn"));

        let from_env = config.filter(Some("pantry_commerce=trace")).unwrap().to_string();
        assert_eq!(from_env, "pantry_commerce=trace");
    }

    #[test]
    fn test_config_serde() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{ "level": "debug", "format": "json" }"#).unwrap();
        assert_eq!(config, LoggingConfig::new(LogLevel::Debug, LogFormat::Json));

        let partial: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, LoggingConfig::default());
    }
}
