//! Catalog source errors (file access and TOML decoding).

use super::error_code::{self, TriageErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not readable: {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Catalog parse error in {path}: {message}")]
    ParseError { path: String, message: String },
}

impl TriageErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
