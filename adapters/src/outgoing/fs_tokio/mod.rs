pub mod file_loader_tokio;
pub mod result_store_fs;
