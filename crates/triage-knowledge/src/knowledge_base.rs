//! The validated, immutable knowledge base.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};
use triage_core::config::KnowledgeBaseConfig;
use triage_core::errors::KnowledgeBaseError;
use triage_core::models::{Cause, Observation, Rule, Symptom};
use triage_core::{CauseId, SymptomId};

use crate::catalog::Catalog;
use crate::validation;

/// Symptom, cause, and rule tables, validated once at load and read-only afterwards.
///
/// Holds no interior mutability, so one instance can be shared by any number
/// of concurrent diagnosis requests.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    causes: Vec<Cause>,
    rules: Vec<Rule>,
    symptom_index: HashMap<SymptomId, usize>,
    cause_index: HashMap<CauseId, usize>,
}

impl KnowledgeBase {
    /// Validate a catalog and build the knowledge base. All-or-nothing.
    pub fn load(catalog: Catalog) -> Result<Self, KnowledgeBaseError> {
        let validated = validation::validate(catalog).inspect_err(|e| {
            warn!(error = %e, "knowledge base rejected");
        })?;

        let symptom_index = validated
            .symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let cause_index = validated
            .causes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        info!(
            symptoms = validated.symptoms.len(),
            causes = validated.causes.len(),
            rules = validated.rules.len(),
            "knowledge base loaded"
        );

        Ok(Self {
            symptoms: validated.symptoms,
            causes: validated.causes,
            rules: validated.rules,
            symptom_index,
            cause_index,
        })
    }

    /// Decode and validate a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeBaseError> {
        Self::load(Catalog::from_toml_str(content, "<string>")?)
    }

    /// Read, decode, and validate a TOML catalog file.
    pub fn from_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        Self::load(Catalog::from_path(path)?)
    }

    /// Load whichever catalog the configuration names, or the built-in one.
    pub fn from_config(config: &KnowledgeBaseConfig) -> Result<Self, KnowledgeBaseError> {
        match &config.catalog_path {
            Some(path) => Self::from_path(path),
            None => crate::builtin::builtin(),
        }
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&i| &self.symptoms[i])
    }

    pub fn cause(&self, id: &str) -> Option<&Cause> {
        self.cause_index.get(id).map(|&i| &self.causes[i])
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Precomputed remedy steps for a cause, in order.
    pub fn remedies(&self, cause_id: &str) -> Option<&[String]> {
        self.cause(cause_id).map(|c| c.remedies.as_slice())
    }

    /// Symptoms grouped by category, categories in first-appearance order.
    pub fn symptoms_by_category(&self) -> Vec<(&str, Vec<&Symptom>)> {
        let mut groups: Vec<(&str, Vec<&Symptom>)> = Vec::new();
        for symptom in &self.symptoms {
            match groups
                .iter()
                .position(|(category, _)| *category == symptom.category)
            {
                Some(i) => groups[i].1.push(symptom),
                None => groups.push((symptom.category.as_str(), vec![symptom])),
            }
        }
        groups
    }

    /// Observed ids that this knowledge base does not know.
    /// Diagnosis tolerates them; callers that want strict input can check here.
    pub fn unknown_symptoms<'o>(&self, observation: &'o Observation) -> Vec<&'o SymptomId> {
        observation
            .iter()
            .filter(|id| !self.symptom_index.contains_key(*id))
            .collect()
    }
}
