//! Configuration system for Triage.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod knowledge_base_config;
pub mod ranking_config;
pub mod triage_config;

pub use knowledge_base_config::KnowledgeBaseConfig;
pub use ranking_config::{RankingConfig, ThresholdPolicy};
pub use triage_config::{CliOverrides, TriageConfig};
