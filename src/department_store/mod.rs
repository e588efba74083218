//! # Department Store
//!
//! The Department resource store. Departments have no HTTP surface of their
//! own; they are loaded at start-up (see [`crate::seed`]) and looked up when a
//! user is patched or rendered.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DepartmentClient;
use crate::model::Department;
use store_actor::ResourceActor;

/// Creates a new Department actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Department>, DepartmentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DepartmentClient::new(generic_client))
}
