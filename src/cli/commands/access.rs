use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::{output_result, text_list, verdict};
use crate::cli::OutputFormat;
use crate::policy::{self, feature_for_route};

#[derive(Subcommand)]
pub enum AccessCommands {
    #[command(about = "Can USER_ROLE manage accounts of TARGET_ROLE?")]
    CanManage {
        #[arg(help = "Acting role")]
        user_role: String,
        #[arg(help = "Role of the account being managed")]
        target_role: String,
    },

    #[command(about = "Can a role open a feature?")]
    Feature {
        #[arg(help = "Acting role")]
        role: String,
        #[arg(help = "Feature key, e.g. client_management")]
        key: String,
    },

    #[command(about = "List the features a role can open")]
    Features {
        #[arg(help = "Acting role")]
        role: String,
    },

    #[command(about = "Can a role call an API route?")]
    Route {
        #[arg(help = "Acting role")]
        role: String,
        #[arg(help = "Request path, e.g. /api/clients/42")]
        path: String,
    },

    #[command(about = "Can a role see restricted sections?")]
    Restricted {
        #[arg(help = "Acting role")]
        role: String,
    },
}

pub fn render(cmd: &AccessCommands) -> (String, Value) {
    match cmd {
        AccessCommands::CanManage { user_role, target_role } => {
            let allowed = policy::can_access_role(user_role, target_role);
            (
                format!("{} managing {}: {}", user_role, target_role, verdict(allowed)),
                json!({ "userRole": user_role, "targetRole": target_role, "allowed": allowed }),
            )
        }
        AccessCommands::Feature { role, key } => {
            let allowed = policy::can_access_feature(role, key);
            (
                format!("{} opening {}: {}", role, key, verdict(allowed)),
                json!({ "role": role, "feature": key, "allowed": allowed }),
            )
        }
        AccessCommands::Features { role } => {
            let features = policy::visible_features(role);
            let text = format!(
                "{} can open:\n{}",
                role,
                text_list(features.iter().map(|f| f.key()), "  (none)")
            );
            (text, json!({ "role": role, "features": features }))
        }
        AccessCommands::Route { role, path } => {
            let allowed = policy::can_access_route(role, path);
            let feature = feature_for_route(path);
            let guard = feature.map_or("unmatched".to_string(), |f| f.key().to_string());
            (
                format!("{} calling {} [{}]: {}", role, path, guard, verdict(allowed)),
                json!({ "role": role, "path": path, "feature": feature, "allowed": allowed }),
            )
        }
        AccessCommands::Restricted { role } => {
            let allowed = policy::can_access_restricted_sections(role);
            (
                format!("{} restricted sections: {}", role, verdict(allowed)),
                json!({ "role": role, "allowed": allowed }),
            )
        }
    }
}

pub fn handle(cmd: AccessCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (text, data) = render(&cmd);
    output_result(output_format, &text, data)
}
