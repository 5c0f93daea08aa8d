//! # triage-session
//!
//! Session state for an interactive diagnosis front end, owned by the caller.
//!
//! Every transition takes the state by value and returns the next state, so
//! the engine and knowledge base never hold per-user data. Timestamps come
//! from the caller.

pub mod history;
pub mod state;
pub mod submit;

pub use history::{symptoms_summary, HistoryRecord};
pub use state::{navigate, LastResult, Page, SessionState};
pub use submit::{submit, SubmitOutcome};
