//! Load-time validation: raw catalog records in, typed records out.
//!
//! Checks run in a fixed order and stop at the first violation: duplicate
//! ids, cause priors, then each rule's certainty before its symptom list,
//! then dangling references.

use std::collections::{BTreeSet, HashSet};

use triage_core::errors::{IntegrityError, KnowledgeBaseError, RangeError, RecordKind};
use triage_core::models::{Cause, Rule, Symptom};
use triage_core::{CauseId, Certainty, RuleId, SymptomId};

use crate::catalog::{Catalog, CauseRecord, RuleRecord, SymptomRecord};

/// Typed records that passed every check.
#[derive(Debug, Clone)]
pub struct ValidatedCatalog {
    pub symptoms: Vec<Symptom>,
    pub causes: Vec<Cause>,
    pub rules: Vec<Rule>,
}

/// Validate a whole catalog.
pub fn validate(catalog: Catalog) -> Result<ValidatedCatalog, KnowledgeBaseError> {
    check_unique("symptom", catalog.symptoms.iter().map(|s| s.id.as_str()))?;
    check_unique("cause", catalog.causes.iter().map(|c| c.id.as_str()))?;
    check_unique("rule", catalog.rules.iter().map(|r| r.id.as_str()))?;

    let causes = catalog
        .causes
        .into_iter()
        .map(convert_cause)
        .collect::<Result<Vec<_>, _>>()?;
    let symptoms: Vec<Symptom> = catalog.symptoms.into_iter().map(convert_symptom).collect();
    let rules = catalog
        .rules
        .into_iter()
        .map(convert_rule)
        .collect::<Result<Vec<_>, _>>()?;

    check_references(&symptoms, &causes, &rules)?;

    Ok(ValidatedCatalog {
        symptoms,
        causes,
        rules,
    })
}

/// Reject the first id that appears twice.
pub fn check_unique<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), IntegrityError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(IntegrityError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Convert a raw value to a `Certainty`, naming the record on failure.
pub fn checked_certainty(
    kind: RecordKind,
    id: &str,
    field: &'static str,
    value: f64,
) -> Result<Certainty, RangeError> {
    Certainty::new(value).ok_or_else(|| RangeError {
        kind,
        id: id.to_string(),
        field,
        value,
    })
}

fn convert_symptom(record: SymptomRecord) -> Symptom {
    Symptom {
        id: SymptomId::new(record.id),
        text: record.text,
        category: record.category,
    }
}

fn convert_cause(record: CauseRecord) -> Result<Cause, RangeError> {
    let prior_certainty = checked_certainty(
        RecordKind::Cause,
        &record.id,
        "prior_certainty",
        record.prior_certainty,
    )?;
    Ok(Cause {
        id: CauseId::new(record.id),
        name: record.name,
        category: record.category,
        prior_certainty,
        severity: record.severity,
        description: record.description,
        remedies: record.remedies,
    })
}

fn convert_rule(record: RuleRecord) -> Result<Rule, KnowledgeBaseError> {
    let rule_certainty =
        checked_certainty(RecordKind::Rule, &record.id, "certainty", record.certainty)?;
    if record.symptoms.is_empty() {
        return Err(IntegrityError::EmptyRule { rule_id: record.id }.into());
    }
    // Repeated symptom ids inside one rule collapse: the requirement is a set.
    let required_symptoms: BTreeSet<SymptomId> =
        record.symptoms.into_iter().map(SymptomId::new).collect();
    Ok(Rule {
        id: RuleId::new(record.id),
        required_symptoms,
        cause_id: CauseId::new(record.cause),
        rule_certainty,
    })
}

/// Every rule must point at known symptoms and a known cause.
pub fn check_references(
    symptoms: &[Symptom],
    causes: &[Cause],
    rules: &[Rule],
) -> Result<(), IntegrityError> {
    let symptom_ids: HashSet<&SymptomId> = symptoms.iter().map(|s| &s.id).collect();
    let cause_ids: HashSet<&CauseId> = causes.iter().map(|c| &c.id).collect();

    for rule in rules {
        if let Some(missing) = rule
            .required_symptoms
            .iter()
            .find(|id| !symptom_ids.contains(id))
        {
            return Err(IntegrityError::UnknownSymptom {
                rule_id: rule.id.to_string(),
                symptom_id: missing.to_string(),
            });
        }
        if !cause_ids.contains(&rule.cause_id) {
            return Err(IntegrityError::UnknownCause {
                rule_id: rule.id.to_string(),
                cause_id: rule.cause_id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = check_unique("rule", ["R1", "R2", "R1"]).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::DuplicateId {
                kind: "rule",
                id: "R1".into()
            }
        );
    }

    #[test]
    fn nan_is_out_of_range() {
        let err = checked_certainty(RecordKind::Rule, "R1", "certainty", f64::NAN).unwrap_err();
        assert_eq!(err.id, "R1");
        assert_eq!(err.field, "certainty");
    }

    #[test]
    fn rule_range_is_checked_before_emptiness() {
        let err = convert_rule(RuleRecord {
            id: "R1".into(),
            symptoms: Vec::new(),
            cause: "C1".into(),
            certainty: 1.5,
        })
        .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::Range(_)));

        let err = convert_rule(RuleRecord {
            id: "R1".into(),
            symptoms: Vec::new(),
            cause: "C1".into(),
            certainty: 0.5,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            KnowledgeBaseError::Integrity(IntegrityError::EmptyRule { .. })
        ));
    }

    #[test]
    fn repeated_rule_symptoms_collapse() {
        let rule = convert_rule(RuleRecord {
            id: "R1".into(),
            symptoms: vec!["G1".into(), "G1".into(), "G2".into()],
            cause: "C1".into(),
            certainty: 0.5,
        })
        .unwrap();
        assert_eq!(rule.required_symptoms.len(), 2);
    }
}
