//! # Department Client
//!
//! Wraps a `ResourceClient<Department>` and adds the lookups the user handler
//! needs to resolve department references.
use crate::department_store::DepartmentError;
use crate::model::{Department, DepartmentId};
use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::{FrameworkError, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the Department store.
#[derive(Clone)]
pub struct DepartmentClient {
    inner: ResourceClient<Department>,
}

impl DepartmentClient {
    pub fn new(inner: ResourceClient<Department>) -> Self {
        Self { inner }
    }

    /// Every department, keyed by id.
    ///
    /// Used to render a list of users with one store round-trip instead of one per user.
    #[instrument(skip(self))]
    pub async fn directory(&self) -> Result<HashMap<DepartmentId, Department>, DepartmentError> {
        let departments = self.find_all().await?;
        debug!(size = departments.len(), "Department directory loaded");
        Ok(departments
            .into_iter()
            .filter_map(|d| d.id.map(|id| (id, d)))
            .collect())
    }
}

#[async_trait]
impl StoreClient<Department> for DepartmentClient {
    type Error = DepartmentError;

    fn inner(&self) -> &ResourceClient<Department> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DepartmentError::from(e)
    }
}
