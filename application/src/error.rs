use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {message}")]
    FileRead { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Failed to store result: {message}")]
    ResultStore { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Task error: {message}")]
    TaskError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
