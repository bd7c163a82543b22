//! Compile-time capture: the operand text comes from `stringify!` and the
//! location from `file!()`/`line!()`, so no source file is read.
//!
//! Every macro takes an optional `logger =>` prefix; without it the
//! process-wide logger is used. A trailing `format!`-style message is
//! optional.

/// `check!(cond)`, `check!(cond, "fmt", args..)`, `check!(log => cond)`.
#[macro_export]
macro_rules! check {
    ($log:expr => $cond:expr $(, $($arg:tt)+)?) => {
        $log.check_captured(
            $cond,
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            ::std::stringify!($cond),
            $crate::__message!($($($arg)+)?),
        )
    };
    ($cond:expr $(, $($arg:tt)+)?) => {
        $crate::check!($crate::global() => $cond $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_eq {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Eq, !=, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Eq, !=, $a, $b $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_ne {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Ne, ==, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Ne, ==, $a, $b $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_le {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Le, >, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Le, >, $a, $b $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_ge {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Ge, <, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Ge, <, $a, $b $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_lt {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Lt, >=, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Lt, >=, $a, $b $(, $($arg)+)?)
    };
}

#[macro_export]
macro_rules! check_gt {
    ($log:expr => $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($log, Gt, <=, $a, $b $(, $($arg)+)?)
    };
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => {
        $crate::__check_relation!($crate::global(), Gt, <=, $a, $b $(, $($arg)+)?)
    };
}

/// Evaluates to the [`CheckFailure`](crate::CheckFailure) after logging it.
///
/// `fatal!()` and `fatal!(log =>)` log an empty message; the CRITICAL line
/// then ends with `] `.
#[macro_export]
macro_rules! fatal {
    () => {
        $crate::fatal!($crate::global() =>)
    };
    ($log:expr => $($arg:tt)*) => {
        $log.fatal_at(
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            $crate::__message!($($arg)*),
        )
    };
    ($($arg:tt)+) => {
        $crate::fatal!($crate::global() => $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($log:expr => $($arg:tt)+) => { $crate::__log!(DEBUG, $log, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log!(DEBUG, $crate::global(), $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($log:expr => $($arg:tt)+) => { $crate::__log!(INFO, $log, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log!(INFO, $crate::global(), $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($log:expr => $($arg:tt)+) => { $crate::__log!(WARNING, $log, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log!(WARNING, $crate::global(), $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($log:expr => $($arg:tt)+) => { $crate::__log!(ERROR, $log, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log!(ERROR, $crate::global(), $($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_relation {
    ($log:expr, $rel:ident, $fails:tt, $a:expr, $b:expr $(, $($arg:tt)+)?) => {
        match (&$a, &$b) {
            (lhs, rhs) => $log.compare_captured(
                $crate::Relation::$rel,
                *lhs $fails *rhs,
                lhs,
                rhs,
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                (::std::stringify!($a), ::std::stringify!($b)),
                $crate::__message!($($($arg)+)?),
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $log:expr, $($arg:tt)+) => {
        $log.log_at(
            $crate::Level::$level,
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            ::std::format_args!($($arg)+),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    () => {
        ::std::option::Option::None
    };
    ($($arg:tt)+) => {
        ::std::option::Option::Some(::std::format!($($arg)+))
    };
}
