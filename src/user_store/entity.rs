//! Store entity implementation for the User domain type.

use crate::model::{User, UserId};
use store_actor::StoreEntity;

impl StoreEntity for User {
    type Id = UserId;

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
