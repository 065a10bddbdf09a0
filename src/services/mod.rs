pub mod id_generator;
pub mod request_builder;
pub mod upload_coordinator;

pub use id_generator::{generate_id_at, generate_id_for};
pub use request_builder::{RequestBuilder, ValidatedForm};
pub use upload_coordinator::UploadCoordinator;
