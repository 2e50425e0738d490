//! Shared error conventions.
//!
//! Every boundary error carries a stable, grep-able code. Codes are attached
//! to log lines as the `code` field so a dropped scene can be traced back to
//! the remote failure that caused it.

/// Implemented by error enums that surface in logs or on rendered pages.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
