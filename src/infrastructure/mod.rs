pub mod backend;
pub mod http_backend;

pub use backend::WorksheetBackend;
pub use http_backend::HttpBackend;
