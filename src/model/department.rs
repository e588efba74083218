use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub u64);

impl From<u64> for DepartmentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<DepartmentId> for u64 {
    fn from(id: DepartmentId) -> Self {
        id.0
    }
}

impl Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A department users can belong to.
///
/// Departments are referenced by users, never owned by them; see
/// [`User::department_id`](crate::model::User::department_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub id: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    /// Creates an unsaved department; the store assigns the id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A department reference as it appears in request bodies: `{"id": 3}`.
///
/// Any other fields the client sends alongside `id` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: DepartmentId,
}

/// A department as rendered inside a user response.
///
/// `name` is absent when the referenced department can no longer be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentView {
    pub id: DepartmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DepartmentView {
    pub fn resolve(id: DepartmentId, department: Option<&Department>) -> Self {
        Self {
            id,
            name: department.map(|d| d.name.clone()),
        }
    }
}
