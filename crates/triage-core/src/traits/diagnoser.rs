use crate::models::{Diagnosis, Observation};

/// Turns an observation into a ranked diagnosis.
///
/// Implementations are pure: the same observation always yields the same
/// diagnosis, and no state is mutated.
pub trait IDiagnoser: Send + Sync {
    fn diagnose(&self, observation: &Observation) -> Diagnosis;
}
