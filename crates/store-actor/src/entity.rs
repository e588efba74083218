//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every stored resource (User, Department, …) implements
//! to be kept by the generic `ResourceActor`. It only has to say two things: which id type it is
//! keyed by, and how to read and stamp that id. Everything else (lookup, enumeration, save,
//! delete) is provided once by the actor.
//!
//! # Architecture Note
//! The id is optional on the entity itself because a resource that has not been saved yet has no
//! identity. The store is the only party that assigns ids; callers hand over an entity with
//! `id() == None` and get back the persisted copy carrying its new id.

use std::fmt::{Debug, Display};

/// Trait that any resource must implement to be managed by [`ResourceActor`](crate::ResourceActor).
///
/// # Id Requirements
/// `Id` must be `Ord` so the store can enumerate in a stable, ascending order, and
/// convertible to and from `u64` so the actor can mint new ids from its counter and move the
/// counter past ids it is handed.
pub trait StoreEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity (usually a `u64` newtype).
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The id of this entity, or `None` if it has never been saved.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the entity stamped with `id`.
    ///
    /// Called by the store when it assigns an id on save.
    #[must_use]
    fn with_id(self, id: Self::Id) -> Self;
}
