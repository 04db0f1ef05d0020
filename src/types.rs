//! Shared types used across the codebase

use serde::{Deserialize, Serialize};

use crate::hierarchy::{rank_of, Role};

/// A platform account as read from the external user store.
///
/// `role` stays a raw string: the store may hold values outside the known
/// role set, and those must rank as least privileged rather than fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    pub id: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl AccountRef {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn rank(&self) -> u8 {
        rank_of(&self.role)
    }

    pub fn known_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}
