pub mod booking;
pub mod codec;
pub mod repository;
pub mod route;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Malformed payload: {0}")]
    Format(String),
    #[error("Store error: {0}")]
    Store(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
