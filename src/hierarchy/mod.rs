//! Role hierarchy - the fixed rank table every access decision is built on
//!
//! Ranks run from 9 (OWNER) down to 1 (USER). Rank 0 is reserved for role
//! strings that do not name a known role, which places them below everyone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank assigned to any role string outside the closed set
pub const UNKNOWN_RANK: u8 = 0;

/// Platform account roles, highest authority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    SubOwner,
    SuperAdmin,
    Admin,
    Sub,
    Master,
    SuperAgent,
    Agent,
    User,
}

impl Role {
    /// Every role in descending rank order
    pub const ALL: [Role; 9] = [
        Role::Owner,
        Role::SubOwner,
        Role::SuperAdmin,
        Role::Admin,
        Role::Sub,
        Role::Master,
        Role::SuperAgent,
        Role::Agent,
        Role::User,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Role::Owner => 9,
            Role::SubOwner => 8,
            Role::SuperAdmin => 7,
            Role::Admin => 6,
            Role::Sub => 5,
            Role::Master => 4,
            Role::SuperAgent => 3,
            Role::Agent => 2,
            Role::User => 1,
        }
    }

    /// Look up the role occupying a rank, if any
    pub fn from_rank(rank: u8) -> Option<Role> {
        Role::ALL.iter().copied().find(|role| role.rank() == rank)
    }

    /// Parse a role identifier. Matching is exact: `"admin"` is not `ADMIN`.
    pub fn parse(s: &str) -> Option<Role> {
        s.parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::SubOwner => "SUB_OWNER",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Sub => "SUB",
            Role::Master => "MASTER",
            Role::SuperAgent => "SUPER_AGENT",
            Role::Agent => "AGENT",
            Role::User => "USER",
        }
    }

    /// Display name used by the panels' menus and pickers
    pub fn label(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::SubOwner => "Sub Owner",
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Sub => "Sub Admin",
            Role::Master => "Master",
            Role::SuperAgent => "Super Agent",
            Role::Agent => "Agent",
            Role::User => "Client",
        }
    }

    /// The role one rank below, `None` for USER
    pub fn direct_child(self) -> Option<Role> {
        Role::from_rank(self.rank() - 1)
    }

    /// The role one rank above, `None` for OWNER
    pub fn direct_parent(self) -> Option<Role> {
        Role::from_rank(self.rank() + 1)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Rank of a raw role string as it arrives from a session or an account record.
///
/// Unknown strings never fail: they get [`UNKNOWN_RANK`] and a warning, so
/// every predicate built on top treats them as least privileged.
pub fn rank_of(role: &str) -> u8 {
    match Role::parse(role) {
        Some(role) => role.rank(),
        None => {
            tracing::warn!("Unknown role '{}' ranked as {}", role, UNKNOWN_RANK);
            UNKNOWN_RANK
        }
    }
}
