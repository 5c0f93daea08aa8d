//! Test fixture loader for Triage golden scenarios and sample catalogs.
//!
//! Provides typed deserialization of the scenario JSON files and helpers for
//! locating catalog fixtures from tests in any crate of the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Read a fixture file as a string (TOML catalogs).
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all files with the given extension in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str, extension: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}

/// One expected ranked entry of a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCause {
    pub cause_id: String,
    pub confidence: f64,
}

/// A golden diagnosis scenario against the built-in catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub observation: Vec<String>,
    /// `"success"` or `"low_confidence"`.
    pub expected_status: String,
    #[serde(default)]
    pub expected: Vec<ExpectedCause>,
}

/// Load every golden scenario, sorted by file name.
pub fn load_scenarios() -> Vec<Scenario> {
    list_fixtures("scenarios", "json")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("bad fixture name {}", path.display()));
            load_fixture(&format!("scenarios/{name}"))
        })
        .collect()
}
