//! # triage-core
//!
//! Foundation crate for the Triage diagnosis engine.
//! Defines the knowledge model, certainty arithmetic, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod certainty;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use certainty::Certainty;
pub use config::TriageConfig;
pub use errors::{KnowledgeBaseError, TriageErrorCode};
pub use ids::{CauseId, RuleId, SymptomId};
pub use models::{
    Cause, Diagnosis, DiagnosisStatus, Observation, RankedCause, Rule, Severity, Symptom,
};
