//! Certainty values outside [0, 1].

use std::fmt;

use super::error_code::{self, TriageErrorCode};

/// Which kind of record carried the bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Cause,
    Rule,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cause => f.write_str("cause"),
            Self::Rule => f.write_str("rule"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} {id}: {field} = {value} is outside [0, 1]")]
pub struct RangeError {
    pub kind: RecordKind,
    pub id: String,
    pub field: &'static str,
    pub value: f64,
}

impl TriageErrorCode for RangeError {
    fn error_code(&self) -> &'static str {
        error_code::KB_RANGE
    }
}
