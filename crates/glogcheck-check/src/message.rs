//! Failure message assembly

use glogcheck_core::Relation;

pub const PREFIX: &str = "Check failed: ";

/// `Check failed: <expr>[ <msg>]`
pub fn condition(expr: &str, msg: Option<&str>) -> String {
    match msg {
        Some(msg) => format!("{}{} {}", PREFIX, expr, msg),
        None => format!("{}{}", PREFIX, expr),
    }
}

/// `Check failed: <lhs> <op> <rhs> (<v1> vs. <v2>) [<msg>]`
///
/// The space after the closing parenthesis is always present.
pub fn relation(
    rel: Relation,
    lhs: &str,
    rhs: &str,
    lhs_value: &str,
    rhs_value: &str,
    msg: Option<&str>,
) -> String {
    format!(
        "{}{} {} {} ({} vs. {}) {}",
        PREFIX,
        lhs,
        rel.symbol(),
        rhs,
        lhs_value,
        rhs_value,
        msg.unwrap_or("")
    )
}
