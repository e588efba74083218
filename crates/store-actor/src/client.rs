//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a `ResourceActor<T>`.
/// It forwards store requests over a Tokio mpsc channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Lifetime** – the actor keeps running while at least one clone is alive.
#[derive(Clone)]
pub struct ResourceClient<T: StoreEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: StoreEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindById { id, respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindAll { respond_to })
            .await
    }

    pub async fn save(&self, entity: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Save { entity, respond_to })
            .await
    }

    /// Replaces an entity that is already stored; never inserts.
    pub async fn update(&self, entity: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { entity, respond_to })
            .await
    }

    pub async fn delete_by_id(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::DeleteById { id, respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { respond_to })
            .await
    }
}
