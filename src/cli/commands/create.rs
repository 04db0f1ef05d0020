use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::output_result;
use crate::cli::OutputFormat;
use crate::resolver::{plan_creation, resolve, CreationPlan};

#[derive(Subcommand)]
pub enum CreateCommands {
    #[command(about = "Resolve the raw hierarchy decision for a creation")]
    Resolve {
        #[arg(help = "Role of the creating account")]
        creator_role: String,
        #[arg(help = "Role of the account to create")]
        new_role: String,
    },

    #[command(about = "Plan the creation flow, enforcing the manage check")]
    Plan {
        #[arg(help = "Role of the creating account")]
        creator_role: String,
        #[arg(help = "Id of the creating account")]
        creator_id: String,
        #[arg(help = "Role of the account to create")]
        new_role: String,
    },
}

pub fn render(cmd: &CreateCommands) -> anyhow::Result<(String, Value)> {
    match cmd {
        CreateCommands::Resolve { creator_role, new_role } => {
            let decision = resolve(creator_role, new_role);
            let text = if !decision.is_valid() {
                format!("{} cannot create {}", creator_role, new_role)
            } else if decision.is_direct_subordinate {
                format!("{} creates {} directly", creator_role, new_role)
            } else {
                match decision.upper_role {
                    Some(upper) => format!(
                        "{} creates {} skipping {} level(s); select a {} parent",
                        creator_role, new_role, decision.skip_level, upper
                    ),
                    None => format!("{} creates {}: no parent role found", creator_role, new_role),
                }
            };
            Ok((text, serde_json::to_value(decision)?))
        }
        CreateCommands::Plan { creator_role, creator_id, new_role } => {
            let plan = plan_creation(creator_role, creator_id.clone(), new_role)?;
            let text = match &plan {
                CreationPlan::Direct { parent_id } => format!("Create {} under {}", new_role, parent_id),
                CreationPlan::SelectParent { parent_role, .. } => {
                    format!("Select a {} parent, then create {}", parent_role, new_role)
                }
            };
            Ok((text, json!({ "plan": plan })))
        }
    }
}

pub fn handle(cmd: CreateCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (text, data) = render(&cmd)?;
    output_result(output_format, &text, data)
}
