//! Creation-flow resolution: does a new account hang directly under its
//! creator, or must the creator first pick an intermediate parent?

pub mod error;

pub use error::HierarchyError;

use serde::{Deserialize, Serialize};

use crate::config::config;
use crate::hierarchy::{rank_of, Role};
use crate::policy::can_access_role;
use crate::types::AccountRef;

/// Outcome of [`resolve`], computed fresh for each query.
///
/// The invalid-request value (`false`, `None`, `0`) carries no reason. Callers
/// must check [`can_access_role`] before treating a decision as permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub is_direct_subordinate: bool,
    pub upper_role: Option<Role>,
    pub skip_level: u8,
}

impl AccessDecision {
    pub const INVALID: AccessDecision = AccessDecision {
        is_direct_subordinate: false,
        upper_role: None,
        skip_level: 0,
    };

    pub fn requires_selection(&self) -> bool {
        self.upper_role.is_some()
    }

    pub fn is_valid(&self) -> bool {
        self.skip_level > 0
    }
}

/// Decide how an account of `new_user_role` attaches when `creator_role`
/// creates it.
///
/// When levels are skipped the required parent is the role directly above
/// the new account, not the one directly below the creator.
pub fn resolve(creator_role: impl AsRef<str>, new_user_role: impl AsRef<str>) -> AccessDecision {
    let (creator_role, new_user_role) = (creator_role.as_ref(), new_user_role.as_ref());
    let creator_rank = rank_of(creator_role);
    let target_rank = rank_of(new_user_role);

    let decision = if creator_rank <= target_rank {
        AccessDecision::INVALID
    } else {
        let skip_level = creator_rank - target_rank;
        if skip_level == 1 {
            AccessDecision {
                is_direct_subordinate: true,
                upper_role: None,
                skip_level,
            }
        } else {
            AccessDecision {
                is_direct_subordinate: false,
                upper_role: Role::from_rank(target_rank + 1),
                skip_level,
            }
        }
    };

    if config().authz.trace_decisions {
        tracing::debug!("resolve: {} creates {} = {:?}", creator_role, new_user_role, decision);
    }
    decision
}

/// How the creation flow continues once the request is known to be allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreationPlan {
    /// The creator becomes the parent
    Direct { parent_id: String },
    /// A parent of `parent_role` must be picked before creating
    SelectParent { parent_role: Role, skip_level: u8 },
}

/// Check the caller contract and turn a decision into the next step of the
/// creation flow.
pub fn plan_creation(
    creator_role: impl AsRef<str>,
    creator_id: impl Into<String>,
    new_user_role: impl AsRef<str>,
) -> Result<CreationPlan, HierarchyError> {
    let (creator_role, new_user_role) = (creator_role.as_ref(), new_user_role.as_ref());
    let cannot_create = || HierarchyError::CannotCreate {
        creator: creator_role.to_string(),
        target: new_user_role.to_string(),
    };

    // An unknown new role has no place in the tree even where rank math allows it
    if Role::parse(new_user_role).is_none() || !can_access_role(creator_role, new_user_role) {
        return Err(cannot_create());
    }

    let decision = resolve(creator_role, new_user_role);
    if decision.is_direct_subordinate {
        return Ok(CreationPlan::Direct {
            parent_id: creator_id.into(),
        });
    }

    match decision.upper_role {
        Some(parent_role) => Ok(CreationPlan::SelectParent {
            parent_role,
            skip_level: decision.skip_level,
        }),
        None => Err(cannot_create()),
    }
}

/// Accounts eligible as the parent in a select-parent plan, input order kept.
/// Direct plans have no candidates.
pub fn candidate_parents<'a>(plan: &CreationPlan, accounts: &'a [AccountRef]) -> Vec<&'a AccountRef> {
    match plan {
        CreationPlan::Direct { .. } => Vec::new(),
        CreationPlan::SelectParent { parent_role, .. } => accounts
            .iter()
            .filter(|account| account.role == parent_role.as_str())
            .collect(),
    }
}

/// Resolve the `parentId` the new account is created with
pub fn assign_parent(plan: &CreationPlan, selected: Option<&AccountRef>) -> Result<String, HierarchyError> {
    match (plan, selected) {
        (CreationPlan::Direct { parent_id }, None) => Ok(parent_id.clone()),
        (CreationPlan::Direct { .. }, Some(_)) => Err(HierarchyError::UnexpectedParentSelection),
        (CreationPlan::SelectParent { parent_role, .. }, None) => {
            Err(HierarchyError::ParentSelectionRequired(*parent_role))
        }
        (CreationPlan::SelectParent { parent_role, .. }, Some(parent)) => {
            if parent.role != parent_role.as_str() {
                return Err(HierarchyError::ParentRoleMismatch {
                    parent_id: parent.id.clone(),
                    expected: *parent_role,
                    actual: parent.role.clone(),
                });
            }
            Ok(parent.id.clone())
        }
    }
}
