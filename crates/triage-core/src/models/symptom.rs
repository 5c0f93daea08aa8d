use serde::{Deserialize, Serialize};

use crate::ids::SymptomId;

/// An observable fault symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    /// Human-readable description shown to whoever selects symptoms.
    pub text: String,
    /// Grouping used by selection surfaces (e.g. "Display", "Power").
    pub category: String,
}
