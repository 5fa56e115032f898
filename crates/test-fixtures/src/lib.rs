//! Fixture loader for golden diagnostic scenarios.
//!
//! Fixtures live under `golden/` in this crate and are plain JSON, decoded into
//! whatever type the calling test declares.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory holding the fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(relative_path: &str) -> (PathBuf, String) {
    let path = fixtures_root().join(relative_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => (path, text),
        Err(e) => panic!("fixture {relative_path} unreadable at {}: {e}", path.display()),
    }
}

/// Decode a JSON fixture into the type the test declares.
///
/// # Panics
/// When the file is missing or does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let (path, text) = read_fixture(relative_path);
    serde_json::from_str(&text).unwrap_or_else(|e| {
        panic!("fixture {} does not decode: {e}", path.display())
    })
}

/// Load a fixture file as raw JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Relative paths of every JSON file in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<String> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .map(|name| format!("{subdir}/{name}"))
        .collect();
    names.sort();
    names
}
