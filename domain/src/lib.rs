pub mod endpoint;
pub mod error;
pub mod field;
pub mod form;
pub mod progress;
pub mod result;
pub mod submission;
