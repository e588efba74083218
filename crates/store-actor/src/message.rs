//! # Store Messages
//!
//! The request type exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request a store operation.
///
/// # Repository Operations
/// Every store speaks the same vocabulary, regardless of what it stores:
///
/// - **FindById**: Fetches one entity, `None` if the id is unknown.
/// - **FindAll**: Enumerates every entity in ascending id order.
/// - **Save**: Inserts or replaces an entity and returns the persisted copy.
/// - **Update**: Replaces a stored entity, failing with `NotFound` if its id is not stored.
/// - **DeleteById**: Removes an entity, failing with `NotFound` if absent.
///
/// `Count` is a cheap size probe used for start-up logging and tests.
#[derive(Debug)]
pub enum ResourceRequest<T: StoreEntity> {
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    Update {
        entity: T,
        respond_to: Response<T>,
    },
    DeleteById {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
