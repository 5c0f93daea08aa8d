//! # triage-knowledge
//!
//! Symptom, cause, and rule tables for the Triage engine.
//!
//! Catalogs are decoded from TOML into loosely-typed records, then validated
//! once into an immutable [`KnowledgeBase`]: unique ids, certainties in
//! [0, 1], non-empty rules, and every rule reference resolved. Loading is
//! all-or-nothing.

pub mod builtin;
pub mod catalog;
pub mod knowledge_base;
pub mod validation;

pub use builtin::{builtin, shared};
pub use catalog::{Catalog, CauseRecord, RuleRecord, SymptomRecord};
pub use knowledge_base::KnowledgeBase;
