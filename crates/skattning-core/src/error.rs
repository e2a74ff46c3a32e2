use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),

    #[error("symptom id {0} appears in more than one category")]
    DuplicateSymptom(String),

    #[error("recommendation '{text}' has no linked symptoms")]
    EmptyLinkedSymptoms { text: String },
}
