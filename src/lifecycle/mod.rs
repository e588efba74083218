//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the two store actors.
//!
//! ## Startup
//!
//! 1. **Seed** - departments and users are handed to their actors *before* the
//!    actors start serving, so the first request already sees them
//! 2. **Spawn** - each store runs in its own Tokio task
//! 3. **Wire** - [`UserDeptSystem::resource`] hands out a [`UserResource`](crate::resource::UserResource)
//!    holding clones of both clients
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for both actor tasks to finish
//!
//! The stores do not depend on each other, so the order does not matter.

pub mod system;
pub mod tracing;

pub use self::tracing::*;
pub use system::*;
