//! # User Resource
//!
//! The six user operations exposed over HTTP, expressed against the two stores.
//! Nothing here knows about HTTP: absence is reported as `None` (reads) or
//! [`UserError::NotFound`] (mutations), and the [`http`](crate::http) layer maps
//! those to status codes.
//!
//! Every operation is a short sequence of independent store calls. Each call is
//! atomic on its own; the sequence is not, so two concurrent updates of the same
//! user race and the last write wins. Replace and patch write through the store's
//! update verb, so a user deleted in between is reported as not found instead of
//! being recreated.
//!
//! Span fields carry ids only; user payloads (names, emails) are never recorded.

use crate::clients::{DepartmentClient, UserClient};
use crate::model::{DepartmentView, User, UserId, UserPatch, UserView};
use crate::user_store::UserError;
use store_actor::StoreClient;
use tracing::{debug, info, instrument, warn};

/// Handler for the User resource.
///
/// Holds explicit handles to the User and Department stores; clone it freely,
/// clones share the same stores.
#[derive(Clone)]
pub struct UserResource {
    users: UserClient,
    departments: DepartmentClient,
    strict_department_refs: bool,
}

impl UserResource {
    pub fn new(users: UserClient, departments: DepartmentClient) -> Self {
        Self {
            users,
            departments,
            strict_department_refs: false,
        }
    }

    /// When enabled, patching a user with an unknown department id fails with
    /// [`UserError::UnknownDepartment`] instead of leaving the reference unchanged.
    #[must_use]
    pub fn with_strict_department_refs(mut self, strict: bool) -> Self {
        self.strict_department_refs = strict;
        self
    }

    /// All users, ascending by id.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, UserError> {
        self.users.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.users.find_by_id(id).await
    }

    /// Saves the user as given and returns the persisted copy.
    ///
    /// The department reference is stored without checking that it exists.
    #[instrument(skip(self, user))]
    pub async fn insert(&self, user: User) -> Result<User, UserError> {
        let saved = self.users.save(user).await?;
        info!(id = ?saved.id, "User inserted");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), UserError> {
        self.users.delete_by_id(id).await?;
        info!(%id, "User deleted");
        Ok(())
    }

    /// Overwrites name, email and department of an existing user.
    ///
    /// Never creates a user: an unknown id yields [`UserError::NotFound`] and the
    /// replacement is discarded. The id of `replacement` is ignored.
    #[instrument(skip(self, replacement))]
    pub async fn replace(&self, id: UserId, replacement: User) -> Result<User, UserError> {
        let mut existing = self.require(id).await?;
        existing.name = replacement.name;
        existing.email = replacement.email;
        existing.department_id = replacement.department_id;
        self.users.update(existing).await
    }

    /// Applies the present fields of `patch` to an existing user.
    ///
    /// A department reference is only taken over if the department exists.
    /// Otherwise the current reference is kept, or, in strict mode, the whole
    /// patch is rejected before anything is saved.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: UserId, patch: UserPatch) -> Result<User, UserError> {
        let mut user = self.require(id).await?;
        if patch.is_empty() {
            debug!(%id, "Patch carries no recognised fields");
        }

        if let Some(department) = patch.department {
            match self.departments.find_by_id(department.id).await? {
                Some(_) => user.department_id = Some(department.id),
                None if self.strict_department_refs => {
                    warn!(%id, department_id = %department.id, "Patch rejected: unknown department");
                    return Err(UserError::UnknownDepartment(department.id));
                }
                None => {
                    warn!(%id, department_id = %department.id, "Unknown department, reference left unchanged");
                }
            }
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }

        self.users.update(user).await
    }

    /// Renders one user, resolving its department name.
    pub async fn render(&self, user: User) -> Result<UserView, UserError> {
        let department = match user.department_id {
            Some(department_id) => {
                let found = self.departments.find_by_id(department_id).await?;
                Some(DepartmentView::resolve(department_id, found.as_ref()))
            }
            None => None,
        };
        Ok(view(user, department))
    }

    /// Renders many users against a single snapshot of the department store.
    pub async fn render_all(&self, users: Vec<User>) -> Result<Vec<UserView>, UserError> {
        if users.iter().all(|u| u.department_id.is_none()) {
            return Ok(users.into_iter().map(|u| view(u, None)).collect());
        }
        let directory = self.departments.directory().await?;
        Ok(users
            .into_iter()
            .map(|u| {
                let department = u
                    .department_id
                    .map(|id| DepartmentView::resolve(id, directory.get(&id)));
                view(u, department)
            })
            .collect())
    }

    async fn require(&self, id: UserId) -> Result<User, UserError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

fn view(user: User, department: Option<DepartmentView>) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        email: user.email,
        department,
    }
}
