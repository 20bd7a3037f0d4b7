use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::handlers;
use cli::{Cli, Commands};
use wizlauncher::config::Config;
use wizlauncher::launch::ProcessSpawner;
use wizlauncher::registry::{self, Registry, RegistrySource};
use wizlauncher::tui::{self, App, TuiRunner};

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wizlauncher")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("wizlauncher.log");

    // The TUI owns the terminal, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn load_registry(cli: &Cli, config: &Config) -> Result<(Registry, RegistrySource)> {
    let explicit = cli.registry.as_deref().or(config.registry.as_deref());
    let (registry, source) = registry::load_registry(explicit).context("Failed to load registry")?;
    info!(
        "Registry from {}: {} projects, {} tools",
        source,
        registry.project_count(),
        registry.tool_count()
    );
    let policy = cli.version_policy.unwrap_or(config.version_policy);
    Ok((registry.with_version_policy(policy), source))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let (registry, source) = load_registry(cli, config)?;
    if cli.is_verbose() {
        println!("{} {}", "Registry:".cyan(), source);
    }

    let Some(command) = &cli.command else {
        return run_tui(registry, config).await;
    };

    let mut out = stdout().lock();
    let spawner = ProcessSpawner::new();

    match command {
        Commands::Projects => handlers::handle_projects(&registry, cli.json, &mut out),
        Commands::Tools { project } => handlers::handle_tools(&registry, project, cli.json, &mut out),
        Commands::Versions { tool } => handlers::handle_versions(&registry, tool, cli.json, &mut out),
        Commands::Resolve { tool, version } => {
            handlers::handle_resolve(&registry, tool, version, cli.json, &mut out)
        }
        Commands::Launch {
            tool,
            version,
            project,
            dry_run,
        } => handlers::handle_launch(
            &registry,
            &spawner,
            tool,
            version.as_deref(),
            project.as_deref(),
            *dry_run,
            &mut out,
        ),
        Commands::Check => handlers::handle_check(&registry, &source, cli.json, &mut out),
    }
}

async fn run_tui(registry: Registry, config: &Config) -> Result<()> {
    info!("Launching TUI mode");

    let app = App::new(Arc::new(registry));
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, config.tui.tick_rate_ms, Arc::new(ProcessSpawner::new()));

    let result = runner.run().await;
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the level is known
    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
