use clap::Parser;
use panel_authz::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present so AUTHZ_* and LOG_FILTER overrides apply
    let _ = dotenvy::dotenv();

    let config = panel_authz::config::config();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    tracing::debug!("panel-authz running in {:?} mode", config.environment);

    let cli = Cli::parse();

    if let Err(e) = panel_authz::cli::run(cli) {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
