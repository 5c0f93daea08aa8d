use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::certainty::Certainty;
use crate::ids::{CauseId, RuleId, SymptomId};
use crate::models::Observation;

/// A single-layer production rule: all required symptoms imply the cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    /// Never empty once the knowledge base is loaded.
    pub required_symptoms: BTreeSet<SymptomId>,
    pub cause_id: CauseId,
    /// Certainty contributed when the rule fires.
    pub rule_certainty: Certainty,
}

impl Rule {
    /// True iff every required symptom is present in the observation.
    /// Extra observed symptoms are irrelevant.
    pub fn is_satisfied_by(&self, observation: &Observation) -> bool {
        self.required_symptoms
            .iter()
            .all(|symptom| observation.contains(symptom))
    }
}
