use serde::{Deserialize, Serialize};
use std::fmt;

use crate::certainty::Certainty;
use crate::ids::CauseId;

/// How damaging a root cause is if left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A root cause that rules can conclude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    pub id: CauseId,
    pub name: String,
    pub category: String,
    /// Base plausibility, used as the seed the first time a rule for this cause fires.
    pub prior_certainty: Certainty,
    pub severity: Severity,
    pub description: String,
    /// Ordered remediation steps.
    pub remedies: Vec<String>,
}
