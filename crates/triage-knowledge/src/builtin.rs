//! The built-in laptop hardware catalog.

use std::sync::OnceLock;

use triage_core::errors::KnowledgeBaseError;

use crate::catalog::Catalog;
use crate::knowledge_base::KnowledgeBase;

/// TOML source of the built-in catalog.
pub const BUILTIN_CATALOG: &str = include_str!("../data/laptop_catalog.toml");

static SHARED: OnceLock<KnowledgeBase> = OnceLock::new();

/// Load a fresh copy of the built-in catalog.
pub fn builtin() -> Result<KnowledgeBase, KnowledgeBaseError> {
    KnowledgeBase::load(Catalog::from_toml_str(BUILTIN_CATALOG, "<builtin>")?)
}

/// Process-wide built-in knowledge base, validated on first use.
pub fn shared() -> Result<&'static KnowledgeBase, KnowledgeBaseError> {
    if let Some(kb) = SHARED.get() {
        return Ok(kb);
    }
    let kb = builtin()?;
    Ok(SHARED.get_or_init(|| kb))
}
