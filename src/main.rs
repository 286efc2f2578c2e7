use anyhow::Result;
use clap::Parser;
use cv_editor::app_log;
use cv_editor::cli::{run, Cli};
use cv_editor::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    init_tracing()?;

    let cli = Cli::parse();
    app_log!(info, "Using configuration file: {}", cli.config.display());
    app_log!(
        info,
        "Environment: {}",
        cv_editor::environment::EnvironmentConfig::get_environment()
    );

    run(cli).await
}
