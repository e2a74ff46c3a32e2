use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use skattning_core::models::catalog::SymptomCatalog;
use skattning_core::models::recommendation::RecommendationBank;
use skattning_recommend::defaults;

use crate::error::StorageError;

/// Current schema version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const SCHEMA_VERSION: u32 = 1;

/// The persisted assessment document: catalog plus recommendation bank.
/// Response maps are session state and are never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Schema version. Missing or 0 = pre-versioned document.
    #[serde(default)]
    pub schema_version: u32,
    pub symptom_categories: SymptomCatalog,
    pub recommendations: RecommendationBank,
}

impl PersistedState {
    /// The seeded defaults used on first start and on fallback.
    pub fn built_in() -> Self {
        let catalog = defaults::default_catalog();
        let recommendations = defaults::default_bank(&catalog);
        PersistedState {
            schema_version: SCHEMA_VERSION,
            symptom_categories: catalog,
            recommendations,
        }
    }
}

/// A JSON state file at a fixed path. `open_default` resolves the platform
/// config directory; tests inject a path directly.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Ok(StateStore {
            path: base.join("se.skattning.bedomning").join("assessment.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the document, stamped with the current schema version.
    /// Writes to a temp file then renames for atomicity.
    pub fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        let dir = self.path.parent().ok_or(StorageError::NoConfigDir)?;
        std::fs::create_dir_all(dir)?;

        let mut stamped = state.clone();
        stamped.schema_version = SCHEMA_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::info!(path = %self.path.display(), "assessment state saved");
        Ok(())
    }

    /// Load the document, running migrations before the typed deserialize.
    pub fn load(&self) -> Result<PersistedState, StorageError> {
        let contents = std::fs::read_to_string(&self.path)?;

        // Parse as raw JSON so migrations can run before deserializing.
        let json: serde_json::Value = serde_json::from_str(&contents)?;
        let on_disk_version = json
            .get("schema_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let state: PersistedState = serde_json::from_value(migrated)?;
        Ok(state)
    }

    /// Load, falling back to the built-in defaults on any failure: missing
    /// file, unreadable JSON, stale pre-versioned document, unsupported
    /// version. The reset is silent apart from a log line.
    pub fn load_or_default(&self) -> PersistedState {
        if !self.exists() {
            return PersistedState::built_in();
        }
        match self.load() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "discarding stored assessment state, using defaults"
                );
                PersistedState::built_in()
            }
        }
    }

    pub fn delete(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::info!(path = %self.path.display(), "assessment state deleted");
        }
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`SCHEMA_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, StorageError> {
    if from_version > SCHEMA_VERSION {
        return Err(StorageError::VersionTooNew {
            found: from_version,
            supported: SCHEMA_VERSION,
        });
    }

    // v0 → v1: pre-versioned documents carry no schema_version field. A v0
    // document whose recommendation entries lack `linked_symptoms` predates
    // symptom linking entirely and cannot be merged — discard it.
    if from_version < 1 {
        if !v0_has_linked_symptoms(&json) {
            return Err(StorageError::StaleDocument);
        }
        let obj = json.as_object_mut().ok_or(StorageError::NotAnObject)?;
        obj.insert(
            "schema_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated assessment state v0 → v1 (stamped schema_version)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

/// True if the first recommendation entry in the document carries a
/// `linked_symptoms` field. An empty or shapeless bank counts as stale.
fn v0_has_linked_symptoms(json: &serde_json::Value) -> bool {
    let Some(profiles) = json.get("recommendations").and_then(|v| v.as_object()) else {
        return false;
    };
    for categories in profiles.values() {
        let Some(categories) = categories.as_object() else {
            continue;
        };
        for entries in categories.values() {
            if let Some(first) = entries.as_array().and_then(|a| a.first()) {
                return first.get("linked_symptoms").is_some();
            }
        }
    }
    false
}
