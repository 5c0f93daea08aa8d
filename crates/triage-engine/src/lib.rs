//! # triage-engine
//!
//! Certainty-factor forward chaining over a single-layer rule base.
//!
//! ## Pipeline
//! 1. **Matcher** selects rules whose required symptoms are all observed
//! 2. **Combinator** accumulates per-cause confidence with the noisy-OR law
//! 3. **Ranker** filters, sorts, and truncates into a bounded diagnosis

pub mod combinator;
pub mod engine;
pub mod matcher;
pub mod ranker;

pub use combinator::{accumulate, Accumulated, Evidence};
pub use engine::{DiagnosisEngine, Finding};
pub use matcher::match_rules;
pub use ranker::rank;
