//! Diagnosis ranker: filter, sort, truncate.

use std::cmp::Ordering;

use tracing::debug;
use triage_core::config::RankingConfig;
use triage_core::models::{Diagnosis, DiagnosisStatus, RankedCause};

use crate::combinator::Evidence;

/// Turn accumulated evidence into a bounded, ordered diagnosis.
///
/// - keeps causes at or above the effective floor (0.0 unless the threshold
///   policy is `Enforce`, so by default nothing is dropped)
/// - sorts by confidence descending, ties by cause id ascending
/// - truncates to `top_k`
/// - an empty result is `LowConfidence`
///
/// `config` is expected to have passed [`RankingConfig::validate`].
pub fn rank(evidence: &Evidence, config: &RankingConfig) -> Diagnosis {
    let floor = config.effective_floor();
    let mut ranked: Vec<RankedCause> = evidence
        .iter()
        .filter(|(_, acc)| acc.confidence.value() >= floor)
        .map(|(cause_id, acc)| RankedCause {
            cause_id: cause_id.clone(),
            confidence: acc.confidence,
        })
        .collect();

    ranked.sort_by(by_confidence_then_id);
    ranked.truncate(config.effective_top_k());

    debug!(
        candidates = evidence.len(),
        ranked = ranked.len(),
        floor,
        "ranking complete"
    );

    if ranked.is_empty() {
        Diagnosis::low_confidence()
    } else {
        Diagnosis {
            ranked,
            status: DiagnosisStatus::Success,
        }
    }
}

fn by_confidence_then_id(a: &RankedCause, b: &RankedCause) -> Ordering {
    b.confidence
        .value()
        .total_cmp(&a.confidence.value())
        .then_with(|| a.cause_id.cmp(&b.cause_id))
}
