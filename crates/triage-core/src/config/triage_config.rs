//! Top-level Triage configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{KnowledgeBaseConfig, RankingConfig, ThresholdPolicy};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TRIAGE_*`)
/// 3. Project config (`triage.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TriageConfig {
    pub ranking: RankingConfig,
    pub knowledge_base: KnowledgeBaseConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub top_k: Option<usize>,
    pub min_confidence: Option<f64>,
    pub threshold_policy: Option<ThresholdPolicy>,
    pub catalog_path: Option<PathBuf>,
}

impl TriageConfig {
    /// Load configuration, resolving CLI > env > `triage.toml` in `root` > defaults.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(
            top_k = config.ranking.effective_top_k(),
            policy = %config.ranking.effective_threshold_policy(),
            builtin_catalog = config.knowledge_base.uses_builtin(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TriageConfig) -> Result<(), ConfigError> {
        config.ranking.validate()
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut TriageConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TriageConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut TriageConfig, other: &TriageConfig) {
        if other.ranking.top_k.is_some() {
            base.ranking.top_k = other.ranking.top_k;
        }
        if other.ranking.min_confidence.is_some() {
            base.ranking.min_confidence = other.ranking.min_confidence;
        }
        if other.ranking.threshold_policy.is_some() {
            base.ranking.threshold_policy = other.ranking.threshold_policy;
        }
        if other.knowledge_base.catalog_path.is_some() {
            base.knowledge_base.catalog_path = other.knowledge_base.catalog_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut TriageConfig) {
        if let Ok(val) = std::env::var("TRIAGE_RANKING_TOP_K") {
            match val.parse::<usize>() {
                Ok(v) => config.ranking.top_k = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid TRIAGE_RANKING_TOP_K"),
            }
        }
        if let Ok(val) = std::env::var("TRIAGE_RANKING_MIN_CONFIDENCE") {
            match val.parse::<f64>() {
                Ok(v) => config.ranking.min_confidence = Some(v),
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring invalid TRIAGE_RANKING_MIN_CONFIDENCE")
                }
            }
        }
        if let Ok(val) = std::env::var("TRIAGE_RANKING_THRESHOLD_POLICY") {
            match val.parse::<ThresholdPolicy>() {
                Ok(v) => config.ranking.threshold_policy = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring TRIAGE_RANKING_THRESHOLD_POLICY"),
            }
        }
        if let Ok(val) = std::env::var("TRIAGE_CATALOG_PATH") {
            config.knowledge_base.catalog_path = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TriageConfig, cli: &CliOverrides) {
        if let Some(v) = cli.top_k {
            config.ranking.top_k = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.ranking.min_confidence = Some(v);
        }
        if let Some(v) = cli.threshold_policy {
            config.ranking.threshold_policy = Some(v);
        }
        if let Some(ref v) = cli.catalog_path {
            config.knowledge_base.catalog_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
