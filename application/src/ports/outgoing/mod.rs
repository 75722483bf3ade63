pub mod file_loader;
pub mod image_service;
pub mod preview_probe;
pub mod progress;
pub mod result_store;
