use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foliowheel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "foliowheel")]
#[command(author, version, about = "A terminal portfolio viewer built around a spring-damped wheel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Handle commands; `config init` runs without a loadable file
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(load_config()?),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&load_config()?),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}

fn load_config() -> Result<AppConfig> {
    let config = AppConfig::load()?;
    debug!(path = %AppConfig::config_path().display(), "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_defaults_to_run() {
        let cli = Cli::try_parse_from(["foliowheel"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn config_init_takes_a_force_flag() {
        let cli = Cli::try_parse_from(["foliowheel", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init { force: true }
            })
        ));
    }
}
