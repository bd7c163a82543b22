//! Core types for glogcheck

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Log severity. Ordered by its numeric value; the five named levels use
/// the classic 10..50 scale so any other value is an "unknown" level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(u8);

impl Level {
    pub const DEBUG: Level = Level(10);
    pub const INFO: Level = Level(20);
    pub const WARNING: Level = Level(30);
    pub const ERROR: Level = Level(40);
    pub const CRITICAL: Level = Level(50);
    pub const FATAL: Level = Level::CRITICAL;

    pub const fn new(severity: u8) -> Self {
        Self(severity)
    }

    pub const fn severity(self) -> u8 {
        self.0
    }

    /// Name of a known level, `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::DEBUG => Some("DEBUG"),
            Self::INFO => Some("INFO"),
            Self::WARNING => Some("WARNING"),
            Self::ERROR => Some("ERROR"),
            Self::CRITICAL => Some("CRITICAL"),
            _ => None,
        }
    }

    /// Single-letter code used at the start of every console line.
    pub fn letter(self) -> char {
        match self {
            Self::INFO => 'I',
            Self::WARNING => 'W',
            Self::ERROR => 'E',
            Self::CRITICAL => 'F',
            Self::DEBUG => 'D',
            _ => '?',
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level {}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::DEBUG),
            "info" => Ok(Self::INFO),
            "warning" | "warn" => Ok(Self::WARNING),
            "error" => Ok(Self::ERROR),
            "critical" | "fatal" => Ok(Self::CRITICAL),
            other => other
                .strip_prefix("level ")
                .unwrap_or(other)
                .parse::<u8>()
                .map(Self)
                .map_err(|_| Error::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

/// A single log record. Built per emit call and dropped once written.
#[derive(Clone, Debug)]
pub struct LogEvent {
    pub level: Level,
    pub timestamp: DateTime<Local>,
    pub process_id: Option<u32>,
    /// Basename of the source file.
    pub filename: String,
    pub line: u32,
    pub message: String,
    /// Positional arguments applied to `{}` placeholders in `message`.
    pub args: Vec<String>,
}

impl LogEvent {
    pub fn new(level: Level, file: &str, line: u32, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            process_id: Some(std::process::id()),
            filename: basename(file).to_string(),
            line,
            message: message.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_process_id(mut self, process_id: Option<u32>) -> Self {
        self.process_id = process_id;
        self
    }
}

/// File and line of a call expression, as recorded by the compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the outermost `#[track_caller]` caller.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The caller's location plus the raw text of its source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub source_text: String,
}

impl CallSite {
    pub fn filename(&self) -> &str {
        basename(&self.file)
    }
}

/// Operand expressions recovered from a call's source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractedArgs {
    Single(String),
    Pair(String, String),
}

impl ExtractedArgs {
    /// All recovered text as one expression.
    pub fn joined(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Pair(a, b) => format!("{}, {}", a, b),
        }
    }
}

/// The relation a binary check expects to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Final path component, or the whole string if it has none.
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
