use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarRankError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Cache error: {0}")]
    CacheError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StarRankError>;
