//! Access policy - pure predicates over the role hierarchy
//!
//! Every predicate takes the caller's role as a raw string and checks the
//! SUB_OWNER bypass before any rank arithmetic. Unknown roles rank 0 and
//! unknown feature keys deny, so bad input always fails closed.

pub mod features;

pub use features::{feature_for_route, Feature, ROUTES};

use crate::config::config;
use crate::hierarchy::{rank_of, Role, UNKNOWN_RANK};
use crate::types::AccountRef;

/// The one role that skips rank comparison in every predicate
pub const BYPASS_ROLE: Role = Role::SubOwner;

fn is_bypass(user_role: &str) -> bool {
    user_role == BYPASS_ROLE.as_str()
}

fn trace(op: &str, user_role: &str, object: &str, allowed: bool) -> bool {
    if config().authz.trace_decisions {
        tracing::debug!("{}: {} -> {} = {}", op, user_role, object, allowed);
    }
    allowed
}

/// Whether `user_role` may manage accounts holding `target_role`.
///
/// Only roles the caller strictly outranks are manageable; peers never are.
/// An unknown target ranks 0 and so sits below every known caller.
pub fn can_access_role(user_role: impl AsRef<str>, target_role: impl AsRef<str>) -> bool {
    let (user_role, target_role) = (user_role.as_ref(), target_role.as_ref());
    let allowed = is_bypass(user_role) || rank_of(target_role) < rank_of(user_role);
    trace("can_access_role", user_role, target_role, allowed)
}

/// Roles `user_role` outranks, highest rank first
pub fn get_accessible_roles(user_role: impl AsRef<str>) -> Vec<Role> {
    let user_role = user_role.as_ref();
    if is_bypass(user_role) {
        return Role::ALL.to_vec();
    }

    let user_rank = rank_of(user_role);
    Role::ALL
        .iter()
        .copied()
        .filter(|role| role.rank() < user_rank)
        .collect()
}

/// Whether `user_role` may open the section behind `feature_key`.
///
/// Note the comparison: the feature's minimum role must outrank the user, the
/// reverse of what the name suggests. A feature whose minimum role is USER is
/// therefore closed to everyone except SUB_OWNER.
pub fn can_access_feature(user_role: impl AsRef<str>, feature_key: impl AsRef<str>) -> bool {
    let (user_role, feature_key) = (user_role.as_ref(), feature_key.as_ref());
    if is_bypass(user_role) {
        return trace("can_access_feature", user_role, feature_key, true);
    }

    let allowed = match Feature::from_key(feature_key) {
        Some(feature) => feature_open_to(user_role, feature),
        None => false,
    };
    trace("can_access_feature", user_role, feature_key, allowed)
}

// Untraced rank check shared by the feature and route predicates
fn feature_open_to(user_role: &str, feature: Feature) -> bool {
    // Rank 0 would clear every minimum under this comparison
    let user_rank = rank_of(user_role);
    user_rank != UNKNOWN_RANK && feature.min_role().rank() > user_rank
}

/// Whether `user_role` may call the API route at `path`. Paths outside the
/// route table are denied to everyone but SUB_OWNER.
pub fn can_access_route(user_role: impl AsRef<str>, path: &str) -> bool {
    let user_role = user_role.as_ref();
    if is_bypass(user_role) {
        return trace("can_access_route", user_role, path, true);
    }

    let allowed = match feature_for_route(path) {
        Some(feature) => feature_open_to(user_role, feature),
        None => false,
    };
    trace("can_access_route", user_role, path, allowed)
}

/// Closed allow-list for restricted sections; not rank based
pub fn can_access_restricted_sections(user_role: impl AsRef<str>) -> bool {
    is_bypass(user_role.as_ref())
}

/// Features `user_role` may open, in catalogue order
pub fn visible_features(user_role: impl AsRef<str>) -> Vec<Feature> {
    let user_role = user_role.as_ref();
    Feature::ALL
        .iter()
        .copied()
        .filter(|feature| can_access_feature(user_role, feature.key()))
        .collect()
}

/// Accounts `user_role` may see in a listing, input order preserved.
///
/// SUB_OWNER gets the whole roster, including accounts with unknown roles.
pub fn filter_accessible_users(user_role: impl AsRef<str>, users: &[AccountRef]) -> Vec<AccountRef> {
    let user_role = user_role.as_ref();
    if is_bypass(user_role) {
        return users.to_vec();
    }

    let accessible = get_accessible_roles(user_role);
    users
        .iter()
        .filter(|user| {
            user.known_role()
                .map_or(false, |role| accessible.contains(&role))
        })
        .cloned()
        .collect()
}
