//! Raw catalog records as they appear in TOML, before validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use triage_core::errors::CatalogError;
use triage_core::models::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub id: String,
    pub text: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub prior_certainty: f64,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub remedies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub id: String,
    pub symptoms: Vec<String>,
    pub cause: String,
    pub certainty: f64,
}

/// An unvalidated catalog. Turn it into a `KnowledgeBase` with `KnowledgeBase::load`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub symptoms: Vec<SymptomRecord>,
    pub causes: Vec<CauseRecord>,
    pub rules: Vec<RuleRecord>,
}

impl Catalog {
    /// Decode a catalog from TOML. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CatalogError> {
        toml::from_str(content).map_err(|e| CatalogError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and decode a TOML catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn to_toml(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
