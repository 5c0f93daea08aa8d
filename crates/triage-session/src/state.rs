//! Pages, the last successful result, and navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use triage_core::models::Diagnosis;
use triage_core::SymptomId;

use crate::history::HistoryRecord;

/// The screen a front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Symptoms,
    Results,
    History,
}

/// The most recent successful diagnosis and the selection that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastResult {
    pub diagnosis: Diagnosis,
    /// Selected ids in selection order.
    pub symptoms: Vec<SymptomId>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub page: Page,
    /// Oldest first.
    pub history: Vec<HistoryRecord>,
    pub last_result: Option<LastResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history_newest_first(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.history.iter().rev()
    }

    /// Number of successful diagnoses recorded this session.
    pub fn diagnosis_count(&self) -> usize {
        self.history.len()
    }
}

/// Move to `page`. History and the last result are untouched.
pub fn navigate(state: SessionState, page: Page) -> SessionState {
    debug!(from = ?state.page, to = ?page, "navigate");
    SessionState { page, ..state }
}
