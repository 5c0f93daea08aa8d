//! Knowledge base cross-reference errors.

use super::error_code::{self, TriageErrorCode};

/// A knowledge base whose records do not reference each other consistently.
/// Fatal: the process must not proceed with it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrityError {
    #[error("rule {rule_id} references unknown symptom {symptom_id}")]
    UnknownSymptom { rule_id: String, symptom_id: String },

    #[error("rule {rule_id} references unknown cause {cause_id}")]
    UnknownCause { rule_id: String, cause_id: String },

    #[error("rule {rule_id} has no required symptoms")]
    EmptyRule { rule_id: String },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },
}

impl TriageErrorCode for IntegrityError {
    fn error_code(&self) -> &'static str {
        error_code::KB_INTEGRITY
    }
}
