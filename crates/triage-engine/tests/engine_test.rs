//! Integration tests for DiagnosisEngine over the built-in and fixture catalogs.

use triage_core::config::{RankingConfig, ThresholdPolicy};
use triage_core::constants::CERTAINTY_EPSILON;
use triage_core::{Certainty, Diagnosis, DiagnosisStatus, Observation, Severity};
use triage_engine::{match_rules, DiagnosisEngine};
use triage_knowledge::KnowledgeBase;

fn builtin_engine() -> DiagnosisEngine<'static> {
    let kb = triage_knowledge::shared().unwrap();
    DiagnosisEngine::new(kb, RankingConfig::default()).unwrap()
}

fn tiny_kb() -> KnowledgeBase {
    KnowledgeBase::from_toml_str(&test_fixtures::read_fixture("catalogs/tiny.toml")).unwrap()
}

fn close(actual: Certainty, expected: f64) -> bool {
    (actual.value() - expected).abs() < CERTAINTY_EPSILON
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn single_rule_backlight() {
    let d = builtin_engine().diagnose_ids(["G006", "G001"]);
    assert_eq!(d.status, DiagnosisStatus::Success);
    assert_eq!(d.ranked.len(), 1);
    assert_eq!(d.ranked[0].cause_id.as_str(), "C01");
    assert!(close(d.ranked[0].confidence, 0.982));
    assert_eq!(d.ranked[0].confidence.percent(), 98);
}

#[test]
fn one_symptom_two_causes() {
    let d = builtin_engine().diagnose_ids(["G038"]);
    let ids: Vec<&str> = d.ranked.iter().map(|r| r.cause_id.as_str()).collect();
    assert_eq!(ids, vec!["C28", "C29"]);
    assert!(close(d.ranked[0].confidence, 0.97));
    assert!(close(d.ranked[1].confidence, 0.895));
}

#[test]
fn converging_rules_accumulate() {
    let d = builtin_engine().diagnose_ids(["G011", "G019", "G018"]);
    let top = d.top().unwrap();
    assert_eq!(top.cause_id.as_str(), "C08");
    assert!(close(top.confidence, 0.9964));
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn empty_observation_is_low_confidence() {
    assert_eq!(
        builtin_engine().diagnose(&Observation::new()),
        Diagnosis::low_confidence()
    );
}

#[test]
fn partial_match_gives_no_credit() {
    let d = builtin_engine().diagnose_ids(["G006"]);
    assert_eq!(d.status, DiagnosisStatus::LowConfidence);
    assert!(d.ranked.is_empty());
}

#[test]
fn unknown_ids_are_inert() {
    let engine = builtin_engine();
    let with_noise = engine.diagnose_ids(["G004", "G999", "not-a-symptom"]);
    let clean = engine.diagnose_ids(["G004"]);
    assert_eq!(with_noise, clean);
}

#[test]
fn output_never_exceeds_top_k() {
    let engine = builtin_engine();
    let all: Observation = engine
        .knowledge_base()
        .symptoms()
        .iter()
        .map(|s| &s.id)
        .collect();
    let d = engine.diagnose(&all);
    assert_eq!(d.ranked.len(), 3);
    for pair in d.ranked.windows(2) {
        assert!(pair[0].confidence.value() >= pair[1].confidence.value());
    }
}

// ---------------------------------------------------------------------------
// Fixture catalog
// ---------------------------------------------------------------------------

#[test]
fn multiple_rules_for_one_cause_fold_in_rule_order() {
    let kb = tiny_kb();
    let engine = DiagnosisEngine::new(&kb, RankingConfig::default()).unwrap();
    let evidence = engine.evidence(&Observation::from_ids(["S2", "S3"]));

    let cb = evidence.get("CB").unwrap();
    let ids: Vec<&str> = cb.rule_ids.iter().map(|r| r.as_str()).collect();
    assert_eq!(ids, vec!["T2", "T3"]);
    // 0.5 ⊕ 0.4 = 0.7, then 0.7 ⊕ 0.7 = 0.91
    assert!(close(cb.confidence, 0.91));
    // CC: 0.5 ⊕ 0.4 = 0.7
    assert!(close(evidence.confidence("CC").unwrap(), 0.7));
    assert!(evidence.get("CA").is_none());
}

#[test]
fn subset_semantics_on_fixture() {
    let kb = tiny_kb();
    let fired = match_rules(&Observation::from_ids(["S1"]), kb.rules());
    assert!(fired.is_empty());
    let fired = match_rules(&Observation::from_ids(["S1", "S4", "S2"]), kb.rules());
    let ids: Vec<&str> = fired.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["T1", "T2"]);
}

#[test]
fn enforced_threshold_drops_weak_causes() {
    let kb = tiny_kb();
    let config = RankingConfig {
        min_confidence: Some(0.8),
        threshold_policy: Some(ThresholdPolicy::Enforce),
        ..Default::default()
    };
    let engine = DiagnosisEngine::new(&kb, config).unwrap();
    let d = engine.diagnose_ids(["S2", "S3"]);
    let ids: Vec<&str> = d.ranked.iter().map(|r| r.cause_id.as_str()).collect();
    assert_eq!(ids, vec!["CB"]);

    let d = engine.diagnose_ids(["S3"]);
    assert_eq!(d.status, DiagnosisStatus::LowConfidence);
}

#[test]
fn ranking_that_would_hide_fired_rules_is_rejected() {
    let kb = triage_knowledge::shared().unwrap();
    let zero_k = RankingConfig {
        top_k: Some(0),
        ..Default::default()
    };
    assert!(DiagnosisEngine::new(kb, zero_k).is_err());

    let nan_floor = RankingConfig {
        min_confidence: Some(f64::NAN),
        threshold_policy: Some(ThresholdPolicy::Enforce),
        ..Default::default()
    };
    assert!(DiagnosisEngine::new(kb, nan_floor).is_err());

    // The smallest accepted settings still report the rule that fired.
    let tightest = RankingConfig {
        top_k: Some(1),
        min_confidence: Some(0.0),
        threshold_policy: Some(ThresholdPolicy::Enforce),
    };
    let engine = DiagnosisEngine::new(kb, tightest).unwrap();
    let d = engine.diagnose_ids(["G006", "G001"]);
    assert_eq!(d.status, DiagnosisStatus::Success);
    assert_eq!(d.ranked.len(), 1);
}

#[test]
fn findings_resolve_names_and_remedies() {
    let kb = tiny_kb();
    let engine = DiagnosisEngine::new(&kb, RankingConfig::default()).unwrap();
    let d = engine.diagnose_ids(["S1", "S4"]);
    let findings = engine.findings(&d);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].cause.name, "backlight");
    assert_eq!(findings[0].cause.severity, Severity::Medium);
    assert_eq!(findings[0].remedies().len(), 2);
    assert!(close(findings[0].confidence, 0.8));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn diagnosis_serializes_to_json() {
    let d = builtin_engine().diagnose_ids(["G038"]);
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["ranked"][0]["cause_id"], "C28");
    let back: Diagnosis = serde_json::from_value(json).unwrap();
    assert_eq!(back.status, d.status);
    assert_eq!(back.ranked.len(), d.ranked.len());
    for (a, b) in back.ranked.iter().zip(&d.ranked) {
        assert_eq!(a.cause_id, b.cause_id);
        assert!(close(a.confidence, b.confidence.value()));
    }

    let low = serde_json::to_value(Diagnosis::low_confidence()).unwrap();
    assert_eq!(low["status"], "low_confidence");
    assert_eq!(low["ranked"].as_array().unwrap().len(), 0);
}
