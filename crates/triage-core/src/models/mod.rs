//! Knowledge model and diagnosis result types.

pub mod cause;
pub mod diagnosis;
pub mod observation;
pub mod rule;
pub mod symptom;

pub use cause::{Cause, Severity};
pub use diagnosis::{Diagnosis, DiagnosisStatus, RankedCause};
pub use observation::Observation;
pub use rule::Rule;
pub use symptom::Symptom;
