use thiserror::Error;

use crate::hierarchy::Role;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Role '{creator}' cannot create accounts with role '{target}'")]
    CannotCreate { creator: String, target: String },

    #[error("A parent account with role {0} must be selected")]
    ParentSelectionRequired(Role),

    #[error("Selected parent '{parent_id}' has role '{actual}', expected {expected}")]
    ParentRoleMismatch {
        parent_id: String,
        expected: Role,
        actual: String,
    },

    #[error("Direct subordinates are attached to their creator; no parent selection expected")]
    UnexpectedParentSelection,
}
