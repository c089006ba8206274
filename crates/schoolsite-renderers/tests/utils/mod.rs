//! Fixture loading utilities shared by the integration tests.

use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Loads a fixture file as a string.
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn load_fixture(path: &str) -> String {
	let full_path = fixtures_dir().join(path);
	std::fs::read_to_string(&full_path)
		.unwrap_or_else(|e| panic!("Failed to load fixture at {:?}: {}", full_path.display(), e))
}

/// Loads a JSON fixture as a raw value.
///
/// # Panics
///
/// Panics if the file cannot be read or is not valid JSON.
pub fn load_json_fixture(path: &str) -> serde_json::Value {
	serde_json::from_str(&load_fixture(path))
		.unwrap_or_else(|e| panic!("Failed to parse JSON fixture at {}: {}", path, e))
}
