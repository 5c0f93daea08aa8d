//! Evidence combinator: per-cause noisy-OR accumulation of fired rules.
//!
//! The first rule for a cause seeds it with `combine(prior, rule_certainty)`;
//! each further rule folds in with `combine(acc, rule_certainty)`. A cause that
//! no rule supports never appears: its prior alone is not evidence.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use triage_core::models::Rule;
use triage_core::{CauseId, Certainty, RuleId};
use triage_knowledge::KnowledgeBase;

/// Accumulated confidence for one cause.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated {
    pub confidence: Certainty,
    /// Rules that contributed, ascending by id.
    pub rule_ids: Vec<RuleId>,
}

/// Per-cause accumulated confidence, keyed in cause-id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evidence {
    entries: BTreeMap<CauseId, Accumulated>,
}

impl Evidence {
    pub fn get(&self, cause_id: &str) -> Option<&Accumulated> {
        self.entries.get(cause_id)
    }

    pub fn confidence(&self, cause_id: &str) -> Option<Certainty> {
        self.get(cause_id).map(|a| a.confidence)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CauseId, &Accumulated)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulate the effect of every fired rule, in any order.
///
/// Contributions to one cause are folded in ascending rule-id order, so the
/// result is bit-for-bit identical however `fired` is ordered.
pub fn accumulate(kb: &KnowledgeBase, fired: &[&Rule]) -> Evidence {
    let mut by_cause: BTreeMap<&CauseId, Vec<&Rule>> = BTreeMap::new();
    for &rule in fired {
        by_cause.entry(&rule.cause_id).or_default().push(rule);
    }

    let mut entries = BTreeMap::new();
    for (cause_id, mut rules) in by_cause {
        let Some(cause) = kb.cause(cause_id.as_str()) else {
            // Unreachable for rules that came from `kb`; validation resolved every cause.
            warn!(cause = %cause_id, "fired rule targets a cause outside the knowledge base");
            continue;
        };
        rules.sort_by(|a, b| a.id.cmp(&b.id));

        let confidence = Certainty::combine_all(
            cause.prior_certainty,
            rules.iter().map(|r| r.rule_certainty),
        );
        debug!(
            cause = %cause_id,
            prior = %cause.prior_certainty,
            rules = rules.len(),
            confidence = %confidence,
            "accumulated evidence"
        );
        entries.insert(
            cause_id.clone(),
            Accumulated {
                confidence,
                rule_ids: rules.iter().map(|r| r.id.clone()).collect(),
            },
        );
    }

    Evidence { entries }
}

/// Build evidence directly from `(cause, confidence)` pairs.
impl FromIterator<(CauseId, Certainty)> for Evidence {
    fn from_iter<T: IntoIterator<Item = (CauseId, Certainty)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(cause_id, confidence)| {
                    (
                        cause_id,
                        Accumulated {
                            confidence,
                            rule_ids: Vec::new(),
                        },
                    )
                })
                .collect(),
        }
    }
}
