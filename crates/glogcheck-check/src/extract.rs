//! Operand expression recovery from a call's source text
//!
//! This is a textual heuristic, not a parser. The argument list runs from the
//! first `(` on the line to the last `)` (or to the last `,` before the
//! message), and the operands are split at the first `,`. It therefore
//! misreads:
//! - nested calls with commas, e.g. `log.check_eq(max(a, b), c)`
//! - string literal operands containing `(`, `)` or `,`
//! - calls spanning several physical lines
//! - receivers that are calls themselves, e.g. `logger().check(x)`
//!
//! In those cases the best-effort substring is returned; the check still
//! fires, only the message text degrades.

use glogcheck_core::ExtractedArgs;

/// Recover the literal operand text of a check call.
///
/// `message` is the trailing message argument, if the call had one.
pub fn extract(source_text: &str, message: Option<&str>) -> ExtractedArgs {
    let start = source_text.find('(').map(|i| i + 1).unwrap_or(0);
    let end = match message {
        None => source_text.rfind(')'),
        Some(msg) => message_start(source_text, msg)
            .and_then(|pos| source_text[..pos].rfind(','))
            .filter(|&comma| comma >= start)
            .or_else(|| comma_before_close(source_text)),
    };
    let Some(end) = end.filter(|&end| end >= start) else {
        return ExtractedArgs::Single(String::new());
    };

    let args = &source_text[start..end];
    match args.find(',') {
        None => ExtractedArgs::Single(trim_spaces(args)),
        Some(comma) => ExtractedArgs::Pair(
            trim_spaces(&args[..comma]),
            trim_spaces(&args[comma + 1..]),
        ),
    }
}

/// Where the message argument begins: as a string literal if it was written
/// inline, otherwise wherever its text first appears.
fn message_start(source_text: &str, msg: &str) -> Option<usize> {
    if msg.is_empty() {
        return None;
    }
    source_text
        .find(&format!("\"{}\"", msg))
        .or_else(|| source_text.find(msg))
}

// message passed as a variable or built with format!
fn comma_before_close(source_text: &str) -> Option<usize> {
    let close = source_text.rfind(')')?;
    source_text[..close].rfind(',')
}

/// Strip leading and trailing spaces. Tabs and other whitespace stay.
fn trim_spaces(s: &str) -> String {
    s.trim_matches(' ').to_string()
}
