use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid value for field {field}: {message}")]
    InvalidFieldValue { field: String, message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
