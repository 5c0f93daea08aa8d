//! TriageErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable code
/// that callers can match on without parsing messages.
pub trait TriageErrorCode {
    /// Returns the error code string (e.g., "KB_INTEGRITY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const KB_INTEGRITY: &str = "KB_INTEGRITY";
pub const KB_RANGE: &str = "KB_RANGE";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
