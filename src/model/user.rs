use crate::model::{DepartmentId, DepartmentRef, DepartmentView};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Store
/// This struct implements the [`StoreEntity`](store_actor::StoreEntity) trait,
/// allowing it to be kept by a [`ResourceActor`](store_actor::ResourceActor).
///
/// The department is held as a foreign key. Resolving it to a full
/// [`Department`](crate::model::Department) is left to whoever needs the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// `None` until the store has assigned an id.
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub department_id: Option<DepartmentId>,
}

impl User {
    /// Creates an unsaved user without a department.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            department_id: None,
        }
    }

    #[must_use]
    pub fn in_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }
}

/// Full user body accepted by `POST /users` and `PUT /users/{id}`.
///
/// ```json
/// {"id": null, "name": "Alice", "email": "alice@x.com", "department": {"id": 1}}
/// ```
///
/// Missing `name`/`email` default to the empty string; no validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            email: payload.email,
            department_id: payload.department.map(|d| d.id),
        }
    }
}

/// Partial update accepted by `PATCH /users/{id}`.
///
/// Every field is optional and only present fields are applied. Unrecognised
/// keys in the request body are ignored, and `"department": null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.department.is_none()
    }
}

/// A user as rendered in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub department: Option<DepartmentView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ignores_extra_department_fields() {
        let payload: UserPayload = serde_json::from_value(json!({
            "name": "Alice",
            "email": "alice@x.com",
            "department": {"id": 2, "name": "whatever the client says"}
        }))
        .unwrap();

        let user = User::from(payload);
        assert_eq!(user.id, None);
        assert_eq!(user.department_id, Some(DepartmentId(2)));
    }

    #[test]
    fn test_payload_defaults_missing_fields() {
        let payload: UserPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload, UserPayload::default());
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let patch: UserPatch = serde_json::from_value(json!({"foo": "bar"})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_null_department_is_absent() {
        let patch: UserPatch =
            serde_json::from_value(json!({"email": "new@x.com", "department": null})).unwrap();
        assert_eq!(patch.email.as_deref(), Some("new@x.com"));
        assert_eq!(patch.department, None);
    }

    #[test]
    fn test_patch_null_name_and_email_are_absent() {
        let patch: UserPatch =
            serde_json::from_value(json!({"name": null, "email": null})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_department_id_must_be_a_number() {
        let result = serde_json::from_value::<UserPatch>(json!({"department": {"id": "2"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_mistyped_name() {
        let result = serde_json::from_value::<UserPatch>(json!({"name": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn test_view_renders_null_department() {
        let view = UserView {
            id: Some(UserId(1)),
            name: "A".into(),
            email: "a@x.com".into(),
            department: None,
        };
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"id": 1, "name": "A", "email": "a@x.com", "department": null})
        );
    }
}
