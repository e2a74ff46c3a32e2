use thiserror::Error;

use skattning_recommend::error::RecommendError;
use skattning_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
