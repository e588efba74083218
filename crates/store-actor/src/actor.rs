//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the component that owns the entities of one resource
//! type. It implements the "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its messages *sequentially*,
/// so a single store call is atomic without any `Mutex` around the map. Sequences of
/// calls made by a client (find, then save) are not.
///
/// # Usage Pattern
///
/// ```rust
/// use store_actor::{ResourceActor, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, text: String }
///
/// impl StoreEntity for Note {
///     type Id = u64;
///     fn id(&self) -> Option<u64> { self.id }
///     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, text: "hi".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Implementation Details
///
/// The actor keeps a `BTreeMap` (`store`) so enumeration comes back in ascending id order, and a
/// `u64` counter (`next_id`) for id generation.
///
/// * **Save**:
///     1. If the entity carries an id that is already stored, the record is replaced in place.
///     2. Otherwise a fresh id is taken from `next_id`; a client-supplied id that is not stored
///        is not honoured.
///     3. Returns the persisted copy.
///
/// * **Update**: replaces the record stored under the entity's id, or fails with
///   [`FrameworkError::NotFound`]. Never inserts, so an id removed concurrently stays removed.
///
/// * **DeleteById**: removes the entry or fails with [`FrameworkError::NotFound`].
///
/// Ids are never reused: the counter only moves forward, also past ids that arrive through
/// [`ResourceActor::with_entities`]. Once it has moved past `u64::MAX` (`next_id` is `None`),
/// every save that needs a fresh id fails with [`FrameworkError::IdsExhausted`].
pub struct ResourceActor<T: StoreEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Option<u64>,
}

impl<T: StoreEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Pre-loads entities, keeping the ids they already carry.
    ///
    /// Entities without an id are assigned one, exactly as a `Save` would. The id counter
    /// moves past the highest pre-loaded id.
    ///
    /// # Errors
    /// [`FrameworkError::IdsExhausted`] if an entity without an id follows one pre-loaded
    /// with `u64::MAX`.
    pub fn with_entities(
        mut self,
        entities: impl IntoIterator<Item = T>,
    ) -> Result<Self, FrameworkError> {
        for entity in entities {
            match entity.id() {
                Some(id) => {
                    let after = id.into().checked_add(1);
                    self.next_id = self.next_id.zip(after).map(|(next, after)| next.max(after));
                    self.store.insert(id, entity);
                }
                None => {
                    self.persist(entity)?;
                }
            }
        }
        Ok(self)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "userdept::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::FindById { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindAll { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, size = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Save { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Save");
                    let result = self.persist(entity);
                    match &result {
                        Ok(saved) => {
                            if let Some(id) = saved.id() {
                                info!(entity_type, %id, size = self.store.len(), "Saved");
                            }
                        }
                        Err(e) => error!(entity_type, error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Update");
                    let result = match entity.id() {
                        Some(id) if self.store.contains_key(&id) => {
                            self.store.insert(id, entity.clone());
                            info!(entity_type, %id, size = self.store.len(), "Updated");
                            Ok(entity)
                        }
                        Some(id) => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                        None => {
                            warn!(entity_type, "Update of an unsaved entity");
                            Err(FrameworkError::NotFound("unsaved entity".into()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteById { id, respond_to } => {
                    debug!(entity_type, %id, "DeleteById");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn persist(&mut self, entity: T) -> Result<T, FrameworkError> {
        let id = match entity.id() {
            Some(id) if self.store.contains_key(&id) => id,
            _ => self.allocate_id()?,
        };
        let saved = entity.with_id(id);
        self.store.insert(id, saved.clone());
        Ok(saved)
    }

    fn allocate_id(&mut self) -> Result<T::Id, FrameworkError> {
        let id = self.next_id.ok_or(FrameworkError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(T::Id::from(id))
    }
}
