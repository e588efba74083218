//! Type-safe wrappers around [`ResourceClient`](store_actor::ResourceClient).

pub mod department_client;
pub mod user_client;

pub use department_client::*;
pub use user_client::*;
