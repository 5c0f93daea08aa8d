use serde::{Deserialize, Serialize};

use crate::certainty::Certainty;
use crate::ids::CauseId;

/// Outcome of a diagnosis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    /// At least one cause was ranked.
    Success,
    /// No rule fired (or the observation was empty). Expected and recoverable.
    LowConfidence,
}

/// A cause together with its accumulated confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCause {
    pub cause_id: CauseId,
    pub confidence: Certainty,
}

/// Ranked, bounded diagnosis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Sorted by confidence descending, ties by cause id ascending.
    pub ranked: Vec<RankedCause>,
    pub status: DiagnosisStatus,
}

impl Diagnosis {
    pub fn low_confidence() -> Self {
        Self {
            ranked: Vec::new(),
            status: DiagnosisStatus::LowConfidence,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DiagnosisStatus::Success
    }

    /// The most likely cause, if any.
    pub fn top(&self) -> Option<&RankedCause> {
        self.ranked.first()
    }
}
