//! Aggregate error for knowledge base loading.

use super::error_code::TriageErrorCode;
use super::{CatalogError, IntegrityError, RangeError};

/// Anything that can stop a knowledge base from loading.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("Knowledge base integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Knowledge base range error: {0}")]
    Range(#[from] RangeError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl TriageErrorCode for KnowledgeBaseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Integrity(e) => e.error_code(),
            Self::Range(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
        }
    }
}
