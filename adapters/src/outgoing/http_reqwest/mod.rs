pub mod image_service_reqwest;
mod progress_body;
