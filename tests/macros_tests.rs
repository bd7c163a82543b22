//! Tests for the crate-level API: capture macros, free functions and the process-wide logger

use glogcheck::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap().lines().map(String::from).collect()
    }
}

fn logger() -> (Logger, Capture) {
    let capture = Capture::default();
    let config = LoggerConfig {
        colors: false,
        ..Default::default()
    };
    (Logger::with_writer(&config, Box::new(capture.clone())), capture)
}

// ===========================================================================
// Macros
// ===========================================================================

#[test]
fn check_macro_captures_condition_text() {
    let (log, capture) = logger();
    let a = 1;
    let b = 2;
    let err = check!(log => a == b, "x").unwrap_err();
    assert_eq!(err.message, "Check failed: a == b x");
    assert_eq!(capture.lines().len(), 1);
    assert!(check!(log => a != b).is_ok());
    assert_eq!(capture.lines().len(), 1);
}

#[test]
fn check_macro_formats_message() {
    let (log, _capture) = logger();
    let items: Vec<u32> = Vec::new();
    let err = check!(log => !items.is_empty(), "got {} items", items.len()).unwrap_err();
    assert_eq!(err.message, "Check failed: !items.is_empty() got 0 items");
}

#[test]
fn relation_macros_capture_both_operands() {
    let (log, capture) = logger();
    let a = 1;
    let b = 2;
    assert_eq!(
        check_eq!(log => a, b).unwrap_err().message,
        "Check failed: a == b (1 vs. 2) "
    );
    assert_eq!(
        check_ne!(log => a + 1, b, "this is log check_ne").unwrap_err().message,
        "Check failed: a + 1 != b (2 vs. 2) this is log check_ne"
    );
    assert_eq!(
        check_le!(log => a + 2, b).unwrap_err().message,
        "Check failed: a + 2 <= b (3 vs. 2) "
    );
    assert_eq!(
        check_ge!(log => a, b).unwrap_err().message,
        "Check failed: a >= b (1 vs. 2) "
    );
    assert_eq!(
        check_lt!(log => b, a, "{}-{}", "x", 9).unwrap_err().message,
        "Check failed: b < a (2 vs. 1) x-9"
    );
    assert_eq!(
        check_gt!(log => a, b).unwrap_err().message,
        "Check failed: a > b (1 vs. 2) "
    );
    assert_eq!(capture.lines().len(), 6);
}

#[test]
fn relation_macros_pass_silently() {
    let (log, capture) = logger();
    let name = String::from("ok");
    assert!(check_eq!(log => name, "ok").is_ok());
    assert!(check_ne!(log => 1, 2).is_ok());
    assert!(check_le!(log => 2, 2).is_ok());
    assert!(check_ge!(log => 2, 2).is_ok());
    assert!(check_lt!(log => 1, 2).is_ok());
    assert!(check_gt!(log => 3, 2).is_ok());
    assert!(capture.lines().is_empty());
    // operands are borrowed, not moved
    assert_eq!(name, "ok");
}

#[test]
fn macro_failure_reports_its_line() {
    let (log, capture) = logger();
    let expected_line = line!() + 1;
    let err = check_eq!(log => 3, 4).unwrap_err();
    assert_eq!(err.line, expected_line);
    assert_eq!(err.filename(), "macros_tests.rs");
    assert!(capture.lines()[0].contains(&format!(" macros_tests.rs:{}] ", expected_line)));
}

#[test]
fn fatal_macro_always_fails() {
    let (log, capture) = logger();
    let err = fatal!(log => "boom {}", 7);
    assert_eq!(err.message, "boom 7");
    let err = fatal!(log =>);
    assert_eq!(err.message, "");
    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with('F')));
}

#[test]
fn log_macros_respect_level() {
    let (log, capture) = logger();
    debug!(log => "hidden {}", 1);
    info!(log => "shown {}", 2);
    warning!(log => "careful");
    error!(log => "bad {:?}", Some(3));
    let lines = capture.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('I') && lines[0].ends_with("] shown 2"));
    assert!(lines[1].starts_with('W'));
    assert!(lines[2].ends_with("] bad Some(3)"));
}

// ===========================================================================
// Process-wide logger
// ===========================================================================

#[test]
fn init_after_first_use_is_rejected() {
    let first = global() as *const Logger;
    let err = init(LoggerConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(first, global() as *const Logger);
}

#[test]
fn free_functions_use_global_logger() {
    assert!(check(true).is_ok());
    assert!(check_le(2, 3).is_ok());
    assert!(check_ne_msg(1, 2, "fine").is_ok());

    let first = 10;
    let second = 20;
    let result = glogcheck::check_eq(first, second);
    assert_eq!(result.unwrap_err().message, "Check failed: first == second (10 vs. 20) ");

    let result = glogcheck::check_gt_msg(first, second, "needs more");
    assert_eq!(
        result.unwrap_err().message,
        "Check failed: first > second (10 vs. 20) needs more"
    );

    let err = glogcheck::fatal("stop");
    assert_eq!(err.message, "stop");
    assert_eq!(err.filename(), "macros_tests.rs");
}

#[test]
fn global_macros_compile_against_default_logger() {
    let value = 5;
    assert!(check!(value == 5).is_ok());
    assert!(check_ge!(value, 5, "at least {}", 5).is_ok());
    let err = check_lt!(value, 5).unwrap_err();
    assert_eq!(err.message, "Check failed: value < 5 (5 vs. 5) ");
}

#[test]
fn check_failure_propagates_with_question_mark() {
    fn validate(log: &Logger, n: i32) -> Result<i32> {
        log.check_ge_msg(n, 0, "negative input")?;
        Ok(n * 2)
    }
    let (log, _capture) = logger();
    assert_eq!(validate(&log, 4).unwrap(), 8);
    let err = validate(&log, -1).unwrap_err();
    assert!(err.is_check_failure());
}
