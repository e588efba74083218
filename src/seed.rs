//! Start-up data for the stores.
//!
//! The Department store has no HTTP surface, so its content comes from here:
//! either the built-in departments or a JSON seed file.
//!
//! ```json
//! {
//!   "departments": [{"id": 1, "name": "Management"}, {"id": 2, "name": "IT"}],
//!   "users": [{"name": "Alice", "email": "alice@x.com", "department": {"id": 2}}]
//! }
//! ```

use crate::model::{Department, User, UserPayload};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id {id} in seed")]
    DuplicateId { kind: &'static str, id: u64 },
}

/// Departments and users to pre-load. Both lists may be empty or missing.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub users: Vec<UserPayload>,
}

impl Seed {
    /// `"Management"` and `"IT"`, no users. The store numbers them 1 and 2.
    pub fn builtin() -> Self {
        Self {
            departments: vec![Department::new("Management"), Department::new("IT")],
            users: Vec::new(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses a seed document and rejects ids given twice.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(raw)?;
        let department_ids = seed.departments.iter().filter_map(|d| d.id.map(|id| id.0));
        check_unique("department", department_ids)?;
        let user_ids = seed.users.iter().filter_map(|u| u.id.map(|id| id.0));
        check_unique("user", user_ids)?;
        Ok(seed)
    }

    /// Splits the seed into store entities, departments first.
    pub fn into_entities(self) -> (Vec<Department>, Vec<User>) {
        let users = self.users.into_iter().map(User::from).collect();
        (self.departments, users)
    }
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = u64>) -> Result<(), SeedError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { kind, id });
        }
    }
    Ok(())
}
