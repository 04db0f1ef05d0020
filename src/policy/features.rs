use serde::{Deserialize, Serialize};

use crate::hierarchy::Role;

/// Panel sections gated by a minimum role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ClientManagement,
    AgentManagement,
    LoginReports,
    LedgerReports,
    CommissionReports,
    MatchDecisions,
    CasinoDecisions,
    OwnerSettings,
    UserDashboard,
}

impl Feature {
    /// Catalogue order, which is also menu order
    pub const ALL: [Feature; 9] = [
        Feature::ClientManagement,
        Feature::AgentManagement,
        Feature::LoginReports,
        Feature::LedgerReports,
        Feature::CommissionReports,
        Feature::MatchDecisions,
        Feature::CasinoDecisions,
        Feature::OwnerSettings,
        Feature::UserDashboard,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Feature::ClientManagement => "client_management",
            Feature::AgentManagement => "agent_management",
            Feature::LoginReports => "login_reports",
            Feature::LedgerReports => "ledger_reports",
            Feature::CommissionReports => "commission_reports",
            Feature::MatchDecisions => "match_decisions",
            Feature::CasinoDecisions => "casino_decisions",
            Feature::OwnerSettings => "owner_settings",
            Feature::UserDashboard => "user_dashboard",
        }
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|feature| feature.key() == key)
    }

    pub fn min_role(self) -> Role {
        match self {
            Feature::ClientManagement => Role::Agent,
            Feature::AgentManagement => Role::Master,
            Feature::LoginReports => Role::Admin,
            Feature::LedgerReports => Role::SuperAgent,
            Feature::CommissionReports => Role::Master,
            Feature::MatchDecisions => Role::SuperAdmin,
            Feature::CasinoDecisions => Role::SuperAdmin,
            Feature::OwnerSettings => Role::SubOwner,
            Feature::UserDashboard => Role::User,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Route prefixes guarded by a feature. A prefix matches the exact path or
/// anything below it on a `/` boundary.
pub const ROUTES: &[(&str, Feature)] = &[
    ("/api/clients", Feature::ClientManagement),
    ("/api/agents", Feature::AgentManagement),
    ("/api/reports/login", Feature::LoginReports),
    ("/api/reports/ledger", Feature::LedgerReports),
    ("/api/reports/commission", Feature::CommissionReports),
    ("/api/decisions/match", Feature::MatchDecisions),
    ("/api/decisions/casino", Feature::CasinoDecisions),
    ("/api/settings", Feature::OwnerSettings),
    ("/api/dashboard", Feature::UserDashboard),
];

/// Feature guarding `path`, by longest matching prefix
pub fn feature_for_route(path: &str) -> Option<Feature> {
    // Only the path component is routed on
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES
        .iter()
        .filter(|(prefix, _)| {
            path == *prefix
                || path
                    .strip_prefix(prefix)
                    .map_or(false, |rest| rest.starts_with('/'))
        })
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, feature)| *feature)
}
