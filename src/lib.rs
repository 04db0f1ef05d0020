pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod middleware;
pub mod policy;
pub mod resolver;
pub mod types;

pub use error::ApiError;
pub use hierarchy::{rank_of, ParseRoleError, Role, UNKNOWN_RANK};
pub use policy::{
    can_access_feature, can_access_restricted_sections, can_access_role, can_access_route,
    filter_accessible_users, get_accessible_roles, visible_features, Feature,
};
pub use resolver::{assign_parent, candidate_parents, plan_creation, resolve, AccessDecision, CreationPlan, HierarchyError};
pub use types::AccountRef;
