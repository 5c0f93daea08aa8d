//! Error handling for Triage.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod integrity_error;
pub mod knowledge_base_error;
pub mod range_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::TriageErrorCode;
pub use integrity_error::IntegrityError;
pub use knowledge_base_error::KnowledgeBaseError;
pub use range_error::{RangeError, RecordKind};
