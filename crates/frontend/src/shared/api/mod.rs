pub mod client;
pub mod error;
pub mod http;
#[cfg(test)]
pub mod mock;

pub use client::{call, decode, get_data, ApiClient, Method, SharedClient};
pub use error::{ApiError, CrudError};
pub use http::HttpApiClient;
