pub mod fs_tokio;
pub mod http_reqwest;
pub mod image_rs;
pub mod progress_watch;
