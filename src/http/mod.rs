//! HTTP inbound adapter exposing the `/users` endpoints.

pub mod error;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::configure;
