//! Macros for last-resort debugging.
//!
//! Errors produced by this crate deliberately carry no more than their
//! kind. When tracking down why some input was rejected, this can be a
//! bit thin. This module provides the macro `xerr!()` that prints a
//! backtrace to stderr if the `extra-debug` feature is enabled and then
//! resolves into whatever the expression it encloses resolves to. Use it
//! whenever you initially produce an error, i.e.:
//!
//! ```rust,ignore
//! if octets.is_empty() {
//!     xerr!(return Err(DecodeError::Empty))
//! }
//! ```
//!
//! Without the feature, the macro is simply the expression.

#[cfg(feature = "extra-debug")]
pub use backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG ---\n{:?}\n--- EXTRA DEBUG ---",
            $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
