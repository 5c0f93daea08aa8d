//! Knowledge base source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the knowledge base is loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    /// TOML catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl KnowledgeBaseConfig {
    pub fn uses_builtin(&self) -> bool {
        self.catalog_path.is_none()
    }
}
