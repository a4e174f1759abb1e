//! Golden scenarios and node builders shared by the integration tests of
//! every Strata crate.

pub mod builders;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

pub use builders::*;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
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

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut out: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    out.sort();
    out
}

/// One step of a scripted engine scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    /// `InputType` name, e.g. `"event"` or `"query"`.
    pub input_type: String,
    pub input: serde_json::Value,
    #[serde(default)]
    pub context: serde_json::Map<String, serde_json::Value>,
    /// Hours to advance the clock before this step.
    #[serde(default)]
    pub advance_hours: i64,
    /// Run a decay tick before this step.
    #[serde(default)]
    pub decay_before: bool,
    #[serde(default)]
    pub expect: ScenarioExpectation,
}

/// Assertions for one step. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioExpectation {
    pub min_confidence: Option<f64>,
    pub max_confidence: Option<f64>,
    pub activated_count: Option<usize>,
    /// Indices of earlier steps whose encoded node must be activated.
    #[serde(default)]
    pub activates_steps: Vec<usize>,
    /// Substrings the fused text must contain.
    #[serde(default)]
    pub text_contains: Vec<String>,
    pub error: Option<String>,
}

/// A scripted scenario: optional TOML config plus ordered steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub config_toml: String,
    pub steps: Vec<ScenarioStep>,
}

/// Load `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}
