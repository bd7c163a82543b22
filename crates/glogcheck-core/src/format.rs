//! Console line rendering
//!
//! One event becomes one line:
//! `<L><MM><DD> <HH>:<MM>:<SS>.<uuuuuu> <pid> <file>:<line>] <message>`,
//! wrapped in an ANSI color pair picked by level.

use std::borrow::Cow;

use crate::types::{Level, LogEvent};

const RESET_SEQ: &str = "\x1b[0m";
const PLACEHOLDER: &str = "{}";

/// ANSI palette. Foreground codes are `30 + color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::INFO => Self::White,
            Level::WARNING => Self::Yellow,
            Level::ERROR | Level::CRITICAL => Self::Red,
            Level::DEBUG => Self::Blue,
            _ => Self::White,
        }
    }

    pub fn escape(self) -> String {
        format!("\x1b[1;{}m", 30 + self as u8)
    }
}

#[derive(Clone, Debug)]
pub struct Formatter {
    colors: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl Formatter {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn render(&self, event: &LogEvent) -> String {
        let pid = event
            .process_id
            .map(|p| p.to_string())
            .unwrap_or_else(|| "????".into());
        let line = format!(
            "{}{} {} {}:{}] {}",
            event.level.letter(),
            event.timestamp.format("%m%d %H:%M:%S%.6f"),
            pid,
            event.filename,
            event.line,
            format_message(event),
        );
        if !self.colors {
            return line;
        }
        format!("{}{}{}", Color::for_level(event.level).escape(), line, RESET_SEQ)
    }
}

/// Applies `event.args` to the `{}` placeholders of `event.message`.
///
/// A template whose placeholder count does not match the arguments is
/// passed through as written.
pub fn format_message(event: &LogEvent) -> Cow<'_, str> {
    let template = event.message.as_str();
    if event.args.is_empty() || template.matches(PLACEHOLDER).count() != event.args.len() {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    for arg in &event.args {
        // count matched above, so every arg has a placeholder
        if let Some(idx) = rest.find(PLACEHOLDER) {
            out.push_str(&rest[..idx]);
            out.push_str(arg);
            rest = &rest[idx + PLACEHOLDER.len()..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
