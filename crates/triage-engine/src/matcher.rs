//! Rule matcher: a rule fires iff its required symptoms are a subset of the observation.

use tracing::trace;
use triage_core::models::{Observation, Rule};

/// Rules that fire for `observation`, in the same relative order as `rules`.
///
/// No partial credit: a rule missing any required symptom does not fire.
/// Observed ids unknown to the rule base are inert.
pub fn match_rules<'r>(observation: &Observation, rules: &'r [Rule]) -> Vec<&'r Rule> {
    let fired: Vec<&Rule> = rules
        .iter()
        .filter(|rule| rule.is_satisfied_by(observation))
        .collect();
    trace!(
        observed = observation.len(),
        fired = fired.len(),
        "rule matching complete"
    );
    fired
}
