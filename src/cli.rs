// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app_log;
use crate::catalog::CvCatalog;
use crate::core::ConfigManager;
use crate::dashboard::build_dashboard;
use crate::suggestions::suggestion_prompt;

#[derive(Parser, Debug)]
#[command(name = "cvdesk")]
#[command(about = "Resume dashboard and experience editor API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long, default_value = "config.yaml", global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the suggestion prompt for a job title
    Prompt {
        #[arg(long)]
        job: String,
    },
    /// Print the dashboard cards of the seed catalog as JSON
    Dashboard,
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = ConfigManager::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let config = config.with_port(port);
            crate::start_web_server(config).await
        }
        Command::Prompt { job } => {
            println!("{}", suggestion_prompt(&job));
            Ok(())
        }
        Command::Dashboard => {
            let catalog = CvCatalog::load(&config.server.catalog_path).await?;
            let cards = build_dashboard(
                catalog.is_linked(),
                &config.server.account_dialog_url,
                &catalog.summaries(),
            );
            app_log!(debug, "Rendering {} dashboard cards", cards.len());
            let json =
                serde_json::to_string_pretty(&cards).context("Failed to serialize dashboard")?;
            println!("{}", json);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serve() {
        let cli = Cli::try_parse_from(["cvdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["cvdesk", "serve", "--port", "9000"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve { port: Some(9000) })));

        let cli =
            Cli::try_parse_from(["cvdesk", "prompt", "--job", "Nurse", "--config", "x.yaml"])
                .unwrap();
        assert!(matches!(cli.command, Some(Command::Prompt { ref job }) if job == "Nurse"));
        assert_eq!(cli.config, PathBuf::from("x.yaml"));
    }
}
