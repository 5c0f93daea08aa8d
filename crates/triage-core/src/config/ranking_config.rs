//! Diagnosis ranking configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_CONFIDENCE, DEFAULT_TOP_K};
use crate::errors::ConfigError;

/// Whether `min_confidence` gates ranked results.
///
/// `Inert` keeps every accumulated cause (any value >= 0), which is the
/// established behaviour. `Enforce` drops causes below `min_confidence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    #[default]
    Inert,
    Enforce,
}

impl ThresholdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inert => "inert",
            Self::Enforce => "enforce",
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inert" => Ok(Self::Inert),
            "enforce" => Ok(Self::Enforce),
            other => Err(format!("unknown threshold policy: {other}")),
        }
    }
}

/// Configuration for the diagnosis ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum ranked causes per diagnosis. Default: 3.
    pub top_k: Option<usize>,
    /// Minimum confidence when the threshold is enforced. Default: 0.4.
    pub min_confidence: Option<f64>,
    /// Default: inert.
    pub threshold_policy: Option<ThresholdPolicy>,
}

impl RankingConfig {
    pub fn effective_top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }

    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    pub fn effective_threshold_policy(&self) -> ThresholdPolicy {
        self.threshold_policy.unwrap_or_default()
    }

    /// Reject a `top_k` of zero and a `min_confidence` outside [0, 1] (NaN included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(min) = self.min_confidence {
            if !(0.0..=1.0).contains(&min) {
                return Err(ConfigError::ValidationFailed {
                    field: "ranking.min_confidence".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The lowest confidence the ranker keeps under the effective policy.
    pub fn effective_floor(&self) -> f64 {
        match self.effective_threshold_policy() {
            ThresholdPolicy::Inert => 0.0,
            ThresholdPolicy::Enforce => self.effective_min_confidence(),
        }
    }
}
