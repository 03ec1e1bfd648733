use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid timestamp: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
