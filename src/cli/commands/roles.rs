use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::{output_result, text_list};
use crate::cli::OutputFormat;
use crate::hierarchy::{rank_of, Role};
use crate::policy::get_accessible_roles;

#[derive(Subcommand)]
pub enum RoleCommands {
    #[command(about = "List every role, highest rank first")]
    List,

    #[command(about = "Show the rank of a role (0 for unknown roles)")]
    Rank {
        #[arg(help = "Role identifier, e.g. SUPER_AGENT")]
        role: String,
    },

    #[command(about = "List the roles a role may manage")]
    Accessible {
        #[arg(help = "Role identifier")]
        role: String,
    },
}

pub fn render(cmd: &RoleCommands) -> (String, Value) {
    match cmd {
        RoleCommands::List => {
            let text = text_list(
                Role::ALL.iter().map(|r| format!("{:<12} {} ({})", r.as_str(), r.rank(), r.label())),
                "No roles",
            );
            let data = Role::ALL
                .iter()
                .map(|r| json!({ "role": r, "rank": r.rank(), "label": r.label() }))
                .collect::<Vec<_>>();
            (text, json!({ "roles": data }))
        }
        RoleCommands::Rank { role } => {
            let rank = rank_of(role);
            (format!("{} has rank {}", role, rank), json!({ "role": role, "rank": rank }))
        }
        RoleCommands::Accessible { role } => {
            let roles = get_accessible_roles(role);
            let text = format!(
                "{} may manage:\n{}",
                role,
                text_list(roles.iter().map(|r| r.as_str()), "  (none)")
            );
            (text, json!({ "role": role, "accessible": roles }))
        }
    }
}

pub fn handle(cmd: RoleCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (text, data) = render(&cmd);
    output_result(output_format, &text, data)
}
