//! Logging infrastructure for PinoyPantry.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Configurable verbosity and output style
//! - `LoggingConfig` - The `[logging]` configuration section
//! - `init_logging` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
