//! Property tests for load-time range validation.

use proptest::prelude::*;

use triage_core::errors::KnowledgeBaseError;
use triage_core::Severity;
use triage_knowledge::{Catalog, CauseRecord, KnowledgeBase, RuleRecord, SymptomRecord};

fn catalog(prior: f64, certainty: f64) -> Catalog {
    Catalog {
        symptoms: vec![SymptomRecord {
            id: "S1".into(),
            text: "symptom".into(),
            category: "Any".into(),
        }],
        causes: vec![CauseRecord {
            id: "C1".into(),
            name: "cause".into(),
            category: "Any".into(),
            prior_certainty: prior,
            severity: Severity::Low,
            description: String::new(),
            remedies: Vec::new(),
        }],
        rules: vec![RuleRecord {
            id: "R1".into(),
            symptoms: vec!["S1".into()],
            cause: "C1".into(),
            certainty,
        }],
    }
}

proptest! {
    #[test]
    fn load_succeeds_iff_certainties_in_unit_interval(
        prior in -1.0_f64..2.0,
        certainty in -1.0_f64..2.0,
    ) {
        let in_range = (0.0..=1.0).contains(&prior) && (0.0..=1.0).contains(&certainty);
        match KnowledgeBase::load(catalog(prior, certainty)) {
            Ok(_) => prop_assert!(in_range),
            Err(KnowledgeBaseError::Range(_)) => prop_assert!(!in_range),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
