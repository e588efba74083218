//! Store entity implementation for the Department domain type.

use crate::model::{Department, DepartmentId};
use store_actor::StoreEntity;

impl StoreEntity for Department {
    type Id = DepartmentId;

    fn id(&self) -> Option<DepartmentId> {
        self.id
    }

    fn with_id(self, id: DepartmentId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
