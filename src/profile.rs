//! Profile document storage
//!
//! Loads and saves the per-user JSON document holding the opaque profile
//! payload and the date-keyed diet plan history. Writes are full overwrites
//! performed immediately after every mutation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or saving the profile document
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to access profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile file is not a valid document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The persisted profile document
///
/// `user_profile` is an opaque payload forwarded verbatim into prompts and
/// never destructured here. Both top-level fields are required; a document
/// missing either fails at load rather than being silently initialized.
/// Unknown top-level fields survive a load/save round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Opaque structured data describing the user (targets, meal count, ...)
    #[serde(rename = "userProfile")]
    pub user_profile: serde_json::Value,

    /// Plan text keyed by `YYYY-MM-DD` date string
    pub diet_plan: BTreeMap<String, String>,

    /// Any additional top-level fields, preserved as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProfileDocument {
    /// Plan text stored under the given date key, if any
    pub fn plan_for(&self, date: &str) -> Option<&str> {
        self.diet_plan.get(date).map(String::as_str)
    }

    /// Store plan text under the given date key, replacing any prior value
    pub fn set_plan(&mut self, date: impl Into<String>, plan: impl Into<String>) {
        self.diet_plan.insert(date.into(), plan.into());
    }
}

/// Filesystem-backed store for one profile document
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store for the document at the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the profile document
    pub fn load(&self) -> Result<ProfileDocument, ProfileError> {
        let content = fs::read_to_string(&self.path)?;
        let document = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "Loaded profile document");
        Ok(document)
    }

    /// Serialize the full document back to disk, overwriting completely
    ///
    /// Pretty-printed for human readability. Not an atomic rename; a crash
    /// mid-write can leave a truncated file.
    pub fn save(&self, document: &ProfileDocument) -> Result<(), ProfileError> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "Saved profile document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_document() -> ProfileDocument {
        ProfileDocument {
            user_profile: serde_json::json!({"calories": 2000, "meals": 3}),
            diet_plan: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("test.json"));

        let mut doc = sample_document();
        doc.set_plan("2024-01-01", "Breakfast: ...; Lunch: ...; Dinner: ...");

        store.save(&doc).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(
            loaded.plan_for("2024-01-01"),
            Some("Breakfast: ...; Lunch: ...; Dinner: ...")
        );
    }

    #[test]
    fn test_extra_fields_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.json");
        fs::write(
            &path,
            r#"{"userProfile": {"calories": 1800}, "diet_plan": {}, "notes": "keep me"}"#,
        )
        .unwrap();

        let store = ProfileStore::new(&path);
        let doc = store.load().unwrap();
        assert_eq!(doc.extra.get("notes"), Some(&serde_json::json!("keep me")));

        store.save(&doc).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.extra.get("notes"), Some(&serde_json::json!("keep me")));
    }

    #[test]
    fn test_set_plan_overwrites_same_key() {
        let mut doc = sample_document();
        doc.set_plan("2024-01-01", "first");
        doc.set_plan("2024-01-01", "second");

        assert_eq!(doc.diet_plan.len(), 1);
        assert_eq!(doc.plan_for("2024-01-01"), Some("second"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("missing.json"));

        assert!(matches!(store.load(), Err(ProfileError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let store = ProfileStore::new(&path);
        assert!(matches!(store.load(), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_load_missing_required_field_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.json");
        fs::write(&path, r#"{"userProfile": {"calories": 2000}}"#).unwrap();

        let store = ProfileStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("diet_plan"));
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pretty.json");
        let store = ProfileStore::new(&path);

        store.save(&sample_document()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "Should use indented output");
    }
}
