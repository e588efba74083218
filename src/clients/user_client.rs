//! # User Client
//!
//! Wraps a `ResourceClient<User>`; the store verbs come from [`StoreClient`].
use crate::model::User;
use crate::user_store::UserError;
use async_trait::async_trait;
use store_actor::{FrameworkError, ResourceClient, StoreClient};

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}
