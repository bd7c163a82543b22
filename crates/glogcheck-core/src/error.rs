//! Error types for glogcheck

use thiserror::Error;

/// Raised by every failed check and by `fatal`.
///
/// Always paired with exactly one CRITICAL line on the console, written
/// before this value is handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CheckFailure {
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line,
        }
    }

    /// Basename of `file`, as printed on the CRITICAL line.
    pub fn filename(&self) -> &str {
        crate::types::basename(&self.file)
    }
}

pub type CheckResult = std::result::Result<(), CheckFailure>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("check failed: {0}")]
    CheckFailed(#[from] CheckFailure),

    #[error("cannot resolve call site {file}:{line}: {reason}")]
    Resolution {
        file: String,
        line: u32,
        reason: String,
    },

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn resolution(file: impl Into<String>, line: u32, reason: impl Into<String>) -> Self {
        Self::Resolution {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::CheckFailed(_))
    }
}
