//! Submitting a symptom selection for diagnosis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use triage_core::models::{DiagnosisStatus, Observation};
use triage_core::traits::IDiagnoser;
use triage_core::SymptomId;
use triage_knowledge::KnowledgeBase;

use crate::history::HistoryRecord;
use crate::state::{LastResult, Page, SessionState};

/// What happened to a submission. Only `Success` changes the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The selection was empty; the diagnoser was not called.
    NothingSelected,
    /// No cause was ranked.
    LowConfidence,
    /// The result was stored, recorded in history, and the page is `Results`.
    Success,
}

/// Diagnose `selected` and fold the result into the session.
///
/// `selected` keeps the caller's selection order, which the history summary
/// uses. `kb` resolves the top cause's name and severity for the history record.
pub fn submit(
    state: SessionState,
    diagnoser: &dyn IDiagnoser,
    kb: &KnowledgeBase,
    selected: &[SymptomId],
    now: DateTime<Utc>,
) -> (SessionState, SubmitOutcome) {
    if selected.is_empty() {
        return (state, SubmitOutcome::NothingSelected);
    }

    let observation: Observation = selected.iter().collect();
    let diagnosis = diagnoser.diagnose(&observation);

    let top = match (diagnosis.status, diagnosis.top()) {
        (DiagnosisStatus::Success, Some(top)) => top.clone(),
        _ => {
            info!(
                selected = selected.len(),
                "submission produced no ranked cause"
            );
            return (state, SubmitOutcome::LowConfidence);
        }
    };

    let mut state = state;
    match HistoryRecord::from_top(kb, &top, selected, now) {
        Some(record) => state.history.push(record),
        None => warn!(
            cause = %top.cause_id,
            "top cause is not in the knowledge base; history not recorded"
        ),
    }
    state.last_result = Some(LastResult {
        diagnosis,
        symptoms: selected.to_vec(),
        timestamp: now,
    });
    state.page = Page::Results;

    info!(
        cause = %top.cause_id,
        confidence = %top.confidence,
        history = state.history.len(),
        "submission recorded"
    );
    (state, SubmitOutcome::Success)
}
