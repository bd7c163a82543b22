//! glogcheck - glog-style checks on top of a colorized console logger
//!
//! Two ways to assert:
//! - methods and free functions (`check_eq(a, b)`) recover the operand text
//!   at failure time by reading the caller's source line
//! - macros (`check_eq!(a, b)`) capture it at compile time with `stringify!`
//!
//! Both write one CRITICAL line and return a [`CheckFailure`].

use std::fmt::{Debug, Display};
use std::sync::OnceLock;

pub use glogcheck_check::{extract, CallSiteResolver, Logger, Sink};
pub use glogcheck_core::{
    basename, CallSite, CheckFailure, CheckResult, Error, ExtractedArgs, Formatter, Level,
    LogEvent, LoggerConfig, Relation, Result, SourceLocation,
};

mod macros;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger. Fails if it already exists, including
/// when something logged through [`global`] first.
pub fn init(config: LoggerConfig) -> Result<&'static Logger> {
    let mut installed = false;
    let logger = GLOBAL.get_or_init(|| {
        installed = true;
        Logger::new(&config)
    });
    if !installed {
        return Err(Error::Config("global logger already initialized".into()));
    }
    Ok(logger)
}

/// The process-wide logger, created with defaults on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

#[track_caller]
pub fn set_level(level: Level) {
    global().set_level(level);
}

#[track_caller]
pub fn debug(msg: impl Display) {
    global().debug(msg);
}

#[track_caller]
pub fn info(msg: impl Display) {
    global().info(msg);
}

#[track_caller]
pub fn warning(msg: impl Display) {
    global().warning(msg);
}

#[track_caller]
pub fn error(msg: impl Display) {
    global().error(msg);
}

#[track_caller]
pub fn check(condition: bool) -> CheckResult {
    global().check(condition)
}

#[track_caller]
pub fn check_msg(condition: bool, msg: impl Display) -> CheckResult {
    global().check_msg(condition, msg)
}

#[track_caller]
pub fn check_eq<A: PartialEq<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_eq(a, b)
}

#[track_caller]
pub fn check_eq_msg<A: PartialEq<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_eq_msg(a, b, msg)
}

#[track_caller]
pub fn check_ne<A: PartialEq<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_ne(a, b)
}

#[track_caller]
pub fn check_ne_msg<A: PartialEq<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_ne_msg(a, b, msg)
}

#[track_caller]
pub fn check_le<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_le(a, b)
}

#[track_caller]
pub fn check_le_msg<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_le_msg(a, b, msg)
}

#[track_caller]
pub fn check_ge<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_ge(a, b)
}

#[track_caller]
pub fn check_ge_msg<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_ge_msg(a, b, msg)
}

#[track_caller]
pub fn check_lt<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_lt(a, b)
}

#[track_caller]
pub fn check_lt_msg<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_lt_msg(a, b, msg)
}

#[track_caller]
pub fn check_gt<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B) -> CheckResult {
    global().check_gt(a, b)
}

#[track_caller]
pub fn check_gt_msg<A: PartialOrd<B> + Debug, B: Debug>(a: A, b: B, msg: impl Display) -> CheckResult {
    global().check_gt_msg(a, b, msg)
}

#[track_caller]
#[must_use = "the failure should be returned to the caller"]
pub fn fatal(msg: impl Display) -> CheckFailure {
    global().fatal(msg)
}
