//! The check engine
//!
//! `Logger` is one logging instance: a console sink, the resolver used to
//! read callers' source lines, and the glog-style checks. The failure path is
//! always: locate the caller, recover the operand text, write one CRITICAL
//! line, then hand the `CheckFailure` back.
//!
//! Every public check and its failure helper are `#[track_caller]`, so the
//! location seen by the helper is the user's call expression and not a frame
//! inside this module.

use std::fmt::{Debug, Display};
use std::io::Write;

use glogcheck_core::{
    CheckFailure, CheckResult, ExtractedArgs, Formatter, Level, LogEvent, LoggerConfig, Relation,
    SourceLocation,
};

use crate::extract::extract;
use crate::message;
use crate::resolver::CallSiteResolver;
use crate::sink::Sink;

#[derive(Debug)]
pub struct Logger {
    sink: Sink,
    resolver: CallSiteResolver,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}

impl Logger {
    /// Logger writing to standard error.
    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_sink(config, Sink::stderr(Formatter::new(config.colors)))
    }

    pub fn with_writer(config: &LoggerConfig, writer: Box<dyn Write + Send>) -> Self {
        Self::with_sink(config, Sink::with_writer(Formatter::new(config.colors), writer))
    }

    fn with_sink(config: &LoggerConfig, sink: Sink) -> Self {
        sink.configure(config.level);
        Self {
            sink,
            resolver: CallSiteResolver::new(config.source_roots.clone()),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn level(&self) -> Level {
        self.sink.min_level()
    }

    #[track_caller]
    pub fn set_level(&self, level: Level) {
        self.sink.configure(level);
        self.log_at(
            Level::DEBUG,
            SourceLocation::caller(),
            format_args!("Log level set to {}", level),
        );
    }

    pub fn set_default_level(&self) {
        self.sink.configure(Level::INFO);
    }

    // ============================================================
    // Passthroughs
    // ============================================================

    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        self.log_at(Level::DEBUG, SourceLocation::caller(), msg);
    }

    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.log_at(Level::INFO, SourceLocation::caller(), msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: impl Display) {
        self.log_at(Level::WARNING, SourceLocation::caller(), msg);
    }

    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.log_at(Level::ERROR, SourceLocation::caller(), msg);
    }

    /// Log a runtime template; `{}` placeholders take `args` in order.
    /// A template that does not fit its arguments is written as-is.
    #[track_caller]
    pub fn log_template(&self, level: Level, template: &str, args: &[&dyn Display]) {
        if !self.sink.enabled(level) {
            return;
        }
        let at = SourceLocation::caller();
        let args = args.iter().map(|a| a.to_string()).collect();
        self.write(&LogEvent::new(level, at.file, at.line, template).with_args(args));
    }

    pub fn log_at(&self, level: Level, at: SourceLocation, msg: impl Display) {
        if !self.sink.enabled(level) {
            return;
        }
        self.write(&LogEvent::new(level, at.file, at.line, msg.to_string()));
    }

    fn write(&self, event: &LogEvent) {
        if let Err(e) = self.sink.emit(event) {
            tracing::warn!(error = %e, "console write failed");
        }
    }

    // ============================================================
    // Checks
    // ============================================================

    #[track_caller]
    pub fn check(&self, condition: bool) -> CheckResult {
        if condition {
            return Ok(());
        }
        Err(self.condition_failed(None))
    }

    #[track_caller]
    pub fn check_msg(&self, condition: bool, msg: impl Display) -> CheckResult {
        if condition {
            return Ok(());
        }
        Err(self.condition_failed(Some(msg.to_string().as_str())))
    }

    #[track_caller]
    pub fn check_eq<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Eq, a != b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_eq_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Eq, a != b, &a, &b, Some(msg.to_string().as_str()))
    }

    #[track_caller]
    pub fn check_ne<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Ne, a == b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_ne_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Ne, a == b, &a, &b, Some(msg.to_string().as_str()))
    }

    #[track_caller]
    pub fn check_le<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Le, a > b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_le_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Le, a > b, &a, &b, Some(msg.to_string().as_str()))
    }

    #[track_caller]
    pub fn check_ge<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Ge, a < b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_ge_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Ge, a < b, &a, &b, Some(msg.to_string().as_str()))
    }

    #[track_caller]
    pub fn check_lt<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Lt, a >= b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_lt_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Lt, a >= b, &a, &b, Some(msg.to_string().as_str()))
    }

    #[track_caller]
    pub fn check_gt<A, B>(&self, a: A, b: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Gt, a <= b, &a, &b, None)
    }

    #[track_caller]
    pub fn check_gt_msg<A, B>(&self, a: A, b: B, msg: impl Display) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.compare(Relation::Gt, a <= b, &a, &b, Some(msg.to_string().as_str()))
    }

    /// Unconditional failure at the caller's location.
    #[track_caller]
    #[must_use = "the failure should be returned to the caller"]
    pub fn fatal(&self, msg: impl Display) -> CheckFailure {
        self.raise(SourceLocation::caller(), msg.to_string())
    }

    // ============================================================
    // Compile-time capture, used by the crate-level macros
    // ============================================================

    pub fn check_captured(
        &self,
        condition: bool,
        at: SourceLocation,
        expr: &str,
        msg: Option<String>,
    ) -> CheckResult {
        if condition {
            return Ok(());
        }
        Err(self.raise(at, message::condition(expr, msg.as_deref())))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compare_captured<A, B>(
        &self,
        rel: Relation,
        failed: bool,
        lhs: &A,
        rhs: &B,
        at: SourceLocation,
        exprs: (&str, &str),
        msg: Option<String>,
    ) -> CheckResult
    where
        A: Debug + ?Sized,
        B: Debug + ?Sized,
    {
        if !failed {
            return Ok(());
        }
        let (lhs_value, rhs_value) = (format!("{:?}", lhs), format!("{:?}", rhs));
        Err(self.raise(
            at,
            message::relation(rel, exprs.0, exprs.1, &lhs_value, &rhs_value, msg.as_deref()),
        ))
    }

    /// A missing message logs and carries an empty string.
    #[must_use = "the failure should be returned to the caller"]
    pub fn fatal_at(&self, at: SourceLocation, msg: Option<String>) -> CheckFailure {
        self.raise(at, msg.unwrap_or_default())
    }

    // ============================================================
    // Failure path
    // ============================================================

    #[track_caller]
    fn condition_failed(&self, msg: Option<&str>) -> CheckFailure {
        let at = SourceLocation::caller();
        let expr = match self.source_args(&at, msg) {
            Some(args) => args.joined(),
            None => "false".to_string(),
        };
        self.raise(at, message::condition(&expr, msg))
    }

    #[track_caller]
    fn compare<A, B>(&self, rel: Relation, failed: bool, lhs: &A, rhs: &B, msg: Option<&str>) -> CheckResult
    where
        A: Debug,
        B: Debug,
    {
        if !failed {
            return Ok(());
        }
        let at = SourceLocation::caller();
        let (lhs_value, rhs_value) = (format!("{:?}", lhs), format!("{:?}", rhs));
        let (lhs_expr, rhs_expr) = match self.source_args(&at, msg) {
            Some(ExtractedArgs::Pair(a, b)) => (a, b),
            Some(ExtractedArgs::Single(a)) => (a, rhs_value.clone()),
            None => (lhs_value.clone(), rhs_value.clone()),
        };
        Err(self.raise(
            at,
            message::relation(rel, &lhs_expr, &rhs_expr, &lhs_value, &rhs_value, msg),
        ))
    }

    fn source_args(&self, at: &SourceLocation, msg: Option<&str>) -> Option<ExtractedArgs> {
        match self.resolver.resolve(at) {
            Ok(site) => Some(extract(&site.source_text, msg)),
            Err(e) => {
                tracing::debug!(error = %e, "call site source unavailable, using operand values");
                None
            }
        }
    }

    /// Write the CRITICAL line, then build the failure. The line is always
    /// attempted before the caller sees the failure, whatever the minimum
    /// level is.
    fn raise(&self, at: SourceLocation, message: String) -> CheckFailure {
        let event = LogEvent::new(Level::CRITICAL, at.file, at.line, message.as_str());
        if let Err(e) = self.sink.emit_unfiltered(&event) {
            tracing::error!(error = %e, location = %at, "failed to write check failure to console");
        }
        CheckFailure::new(message, at.file, at.line)
    }
}
