//! # StoreClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding the default store
//! operations on top of a generic `ResourceClient`.
use crate::{FrameworkError, ResourceClient, StoreEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// Implementors only supply access to the inner client and an error mapping; `find_by_id`,
/// `find_all`, `save`, `update` and `delete_by_id` come for free and are traced.
///
/// # Example
///
/// ```rust
/// use store_actor::{FrameworkError, ResourceClient, StoreClient, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: Option<u64> }
///
/// impl StoreEntity for Tag {
///     type Id = u64;
///     fn id(&self) -> Option<u64> { self.id }
///     fn with_id(self, id: u64) -> Self { Self { id: Some(id) } }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag store: {0}")]
/// struct TagError(String);
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl StoreClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // find_by_id() and delete_by_id() are provided automatically!
///     let _ = client.find_by_id(1).await;
///     let _ = client.delete_by_id(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, ascending by id.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Self::map_error)
    }

    /// Insert or replace an entity.
    #[tracing::instrument(skip(self, entity))]
    async fn save(&self, entity: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().save(entity).await.map_err(Self::map_error)
    }

    /// Replace a stored entity; fails if its id is no longer stored.
    #[tracing::instrument(skip(self, entity), fields(id = ?entity.id()))]
    async fn update(&self, entity: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().update(entity).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_by_id(id).await.map_err(Self::map_error)
    }
}
