use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("unknown category '{category}' for profile '{profile}'")]
    UnknownCategory { profile: String, category: String },

    #[error("recommendation index {index} out of range for {profile}/{category}")]
    IndexOutOfRange {
        profile: String,
        category: String,
        index: usize,
    },

    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),

    #[error("narrative template parse error: {0}")]
    TemplateParse(String),

    #[error("narrative template render error: {0}")]
    TemplateRender(String),
}
