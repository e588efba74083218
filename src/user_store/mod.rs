//! # User Store
//!
//! The User resource store: a [`ResourceActor`] keyed by [`UserId`](crate::model::UserId).
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_actor::StoreEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use userdept::model::User;
//! use userdept::user_store;
//! use store_actor::StoreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let alice = client.save(User::new("Alice", "alice@example.com")).await?;
//!     assert!(alice.id.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use store_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
