//! The built-in laptop catalog validates and matches its documented shape.

use triage_core::Severity;
use triage_knowledge::{builtin, shared};

#[test]
fn test_builtin_loads() {
    let kb = builtin().unwrap();
    assert_eq!(kb.symptoms().len(), 75);
    assert_eq!(kb.causes().len(), 50);
    assert_eq!(kb.rules().len(), 59);
}

#[test]
fn test_builtin_categories() {
    let kb = builtin().unwrap();
    let categories: Vec<&str> = kb.symptoms_by_category().iter().map(|(c, _)| *c).collect();
    assert_eq!(
        categories,
        vec![
            "Display", "Power", "Input", "Audio", "Storage", "Network", "Thermal", "System",
            "Physical"
        ]
    );
}

#[test]
fn test_builtin_reference_values() {
    let kb = builtin().unwrap();
    let c01 = kb.cause("C01").unwrap();
    assert_eq!(c01.prior_certainty.value(), 0.88);
    assert_eq!(c01.severity, Severity::Medium);
    assert_eq!(c01.remedies.len(), 2);

    let r01 = kb.rules().iter().find(|r| r.id.as_str() == "R01").unwrap();
    assert_eq!(r01.cause_id.as_str(), "C01");
    assert_eq!(r01.rule_certainty.value(), 0.85);
    assert_eq!(r01.required_symptoms.len(), 2);
}

#[test]
fn test_every_cause_has_remedies() {
    let kb = builtin().unwrap();
    assert!(kb.causes().iter().all(|c| !c.remedies.is_empty()));
}

#[test]
fn test_shared_is_memoized() {
    let a = shared().unwrap();
    let b = shared().unwrap();
    assert!(std::ptr::eq(a, b));
}
