use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("stored document predates symptom links and cannot be migrated")]
    StaleDocument,

    #[error("schema_version {found} is newer than this build supports ({supported})")]
    VersionTooNew { found: u32, supported: u32 },

    #[error("stored document is not a JSON object")]
    NotAnObject,
}
