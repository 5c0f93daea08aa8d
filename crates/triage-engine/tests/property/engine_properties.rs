//! Property tests for the diagnosis pipeline: order independence, bounded
//! output, ranking order, and subset matching.

use proptest::prelude::*;

use triage_core::config::RankingConfig;
use triage_core::models::Rule;
use triage_core::{DiagnosisStatus, Observation};
use triage_engine::{accumulate, match_rules, rank, DiagnosisEngine};
use triage_knowledge::KnowledgeBase;

fn kb() -> &'static KnowledgeBase {
    triage_knowledge::shared().unwrap()
}

fn symptom_ids() -> Vec<String> {
    kb().symptoms().iter().map(|s| s.id.to_string()).collect()
}

/// A random subset of the built-in symptoms, plus a few ids the catalog lacks.
fn observation_strategy() -> impl Strategy<Value = Vec<String>> {
    let known = symptom_ids();
    let n = known.len();
    (
        prop::collection::vec(0..n, 0..12),
        prop::collection::vec("Z[0-9]{3}", 0..3),
    )
        .prop_map(move |(picks, noise)| {
            picks
                .into_iter()
                .map(|i| known[i].clone())
                .chain(noise)
                .collect()
        })
}

proptest! {
    #[test]
    fn fired_rule_order_does_not_change_evidence(
        ids in observation_strategy(),
        seed in any::<u64>(),
    ) {
        let observation = Observation::from_ids(ids);
        let fired = match_rules(&observation, kb().rules());

        // Deterministic shuffle driven by the seed.
        let mut shuffled: Vec<&Rule> = fired.clone();
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let a = accumulate(kb(), &fired);
        let b = accumulate(kb(), &shuffled);
        prop_assert_eq!(&a, &b);

        let config = RankingConfig::default();
        prop_assert_eq!(rank(&a, &config), rank(&b, &config));
    }

    #[test]
    fn output_is_bounded_and_sorted(ids in observation_strategy(), k in 1_usize..6) {
        let config = RankingConfig { top_k: Some(k), ..Default::default() };
        let engine = DiagnosisEngine::new(kb(), config).unwrap();
        let d = engine.diagnose(&Observation::from_ids(ids));

        prop_assert!(d.ranked.len() <= k);
        prop_assert_eq!(d.ranked.is_empty(), d.status == DiagnosisStatus::LowConfidence);
        for pair in d.ranked.windows(2) {
            let (a, b) = (pair[0].confidence.value(), pair[1].confidence.value());
            prop_assert!(a > b || (a == b && pair[0].cause_id < pair[1].cause_id));
        }
        for ranked in &d.ranked {
            let v = ranked.confidence.value();
            prop_assert!((0.0..=1.0).contains(&v));
            // Any fired rule lifts a cause at least to its prior.
            let prior = kb().cause(ranked.cause_id.as_str()).unwrap().prior_certainty.value();
            prop_assert!(v >= prior);
        }
    }

    #[test]
    fn rule_fires_iff_requirements_observed(ids in observation_strategy()) {
        let observation = Observation::from_ids(ids);
        let fired = match_rules(&observation, kb().rules());
        for rule in kb().rules() {
            let satisfied = rule.required_symptoms.iter().all(|s| observation.contains(s));
            let did_fire = fired.iter().any(|r| r.id == rule.id);
            prop_assert_eq!(satisfied, did_fire);
        }
    }

    #[test]
    fn adding_unknown_ids_changes_nothing(ids in observation_strategy()) {
        let engine = DiagnosisEngine::new(kb(), RankingConfig::default()).unwrap();
        let mut observation = Observation::from_ids(ids);
        let before = engine.diagnose(&observation);
        observation.insert("ZZ-not-in-catalog");
        prop_assert_eq!(engine.diagnose(&observation), before);
    }
}
