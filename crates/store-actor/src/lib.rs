//! # Store Actor
//!
//! This crate provides an in-process, actor-backed repository: one Tokio task per resource type
//! owns that type's entities and serves the repository verbs (find-by-id, find-all, save,
//! update, delete-by-id) over a channel.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - what is stored and how it is identified
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and id assignment
//! 3. **Interface Layer** ([`ResourceClient`], [`StoreClient`]) - type-safe access
//!
//! ```rust
//! use store_actor::{ResourceActor, StoreEntity};
//!
//! #[derive(Clone, Debug)]
//! struct City { id: Option<u64>, name: String }
//!
//! impl StoreEntity for City {
//!     type Id = u64;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<City>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let lisbon = client.save(City { id: None, name: "Lisbon".into() }).await.unwrap();
//!     let found = client.find_by_id(lisbon.id.unwrap()).await.unwrap();
//!     assert_eq!(found.unwrap().name, "Lisbon");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor, so each call is atomic
//! - Different stores run in **parallel**
//! - An actor stops once every clone of its client has been dropped
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so code
//! that depends on a store can be tested without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::StoreClient;
pub use entity::StoreEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
