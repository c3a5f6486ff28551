pub mod api_client;
pub mod cache_service;
pub mod endpoints;
pub mod error;

pub use api_client::DiseaseApiClient;
pub use endpoints::Endpoint;
pub use error::FetchError;
