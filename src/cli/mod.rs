pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "panel-authz")]
#[command(about = "Inspect the operator panel role hierarchy and access policy")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Role table and rank lookups")]
    Roles {
        #[command(subcommand)]
        cmd: commands::roles::RoleCommands,
    },

    #[command(about = "Access policy checks")]
    Access {
        #[command(subcommand)]
        cmd: commands::access::AccessCommands,
    },

    #[command(about = "Account creation flow resolution")]
    Create {
        #[command(subcommand)]
        cmd: commands::create::CreateCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Roles { cmd } => commands::roles::handle(cmd, output_format),
        Commands::Access { cmd } => commands::access::handle(cmd, output_format),
        Commands::Create { cmd } => commands::create::handle(cmd, output_format),
    }
}
