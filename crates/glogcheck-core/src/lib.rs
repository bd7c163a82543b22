//! glogcheck core - log events, levels, rendering, config and the error taxonomy

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::LoggerConfig;
pub use error::{CheckFailure, CheckResult, Error, Result};
pub use format::Formatter;
pub use types::*;
