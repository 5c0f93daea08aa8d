//! History records for successful diagnoses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_core::models::RankedCause;
use triage_core::{CauseId, Certainty, Severity, SymptomId};
use triage_knowledge::KnowledgeBase;

/// How many selected symptoms the summary considers.
pub const SUMMARY_SYMPTOMS: usize = 3;
/// Maximum characters kept from each symptom text in the summary.
pub const SUMMARY_TEXT_CHARS: usize = 30;

/// One successful diagnosis, summarized by its top cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub cause_id: CauseId,
    pub cause_name: String,
    pub confidence: Certainty,
    pub symptoms_text: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
}

impl HistoryRecord {
    /// Build a record for `top`. `None` if the cause is not in `kb`.
    pub fn from_top(
        kb: &KnowledgeBase,
        top: &RankedCause,
        selected: &[SymptomId],
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        let cause = kb.cause(top.cause_id.as_str())?;
        Some(Self {
            cause_id: cause.id.clone(),
            cause_name: cause.name.clone(),
            confidence: top.confidence,
            symptoms_text: symptoms_summary(kb, selected),
            timestamp,
            severity: cause.severity,
        })
    }

    /// Whole-number confidence percentage, truncated.
    pub fn percent(&self) -> u8 {
        self.confidence.percent()
    }

    /// Short timestamp for list display, e.g. `07 Mar • 14:05`.
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%d %b • %H:%M").to_string()
    }
}

/// Summary text for a selection: of the first [`SUMMARY_SYMPTOMS`] selected
/// ids, the known ones, each cut to [`SUMMARY_TEXT_CHARS`] characters.
pub fn symptoms_summary(kb: &KnowledgeBase, selected: &[SymptomId]) -> String {
    selected
        .iter()
        .take(SUMMARY_SYMPTOMS)
        .filter_map(|id| kb.symptom(id.as_str()))
        .map(|s| s.text.chars().take(SUMMARY_TEXT_CHARS).collect::<String>())
        .collect::<Vec<_>>()
        .join(", ")
}
