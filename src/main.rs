use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rosterql::cli::handlers::{self, CommandContext};
use rosterql::cli::{Cli, Commands};
use rosterql::config::RosterConfig;
use rosterql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(cli.verbose, cli.log_file)?;
            handlers::handle_init()
        }
        Commands::Query {
            query,
            variables,
            anonymous,
        } => {
            let ctx = load_context(cli.config, cli.verbose, cli.log_file)?;
            handlers::handle_query(ctx, query, variables, anonymous)
        }
        Commands::Mutate {
            mutation,
            variables,
            anonymous,
        } => {
            let ctx = load_context(cli.config, cli.verbose, cli.log_file)?;
            handlers::handle_mutate(ctx, mutation, variables, anonymous)
        }
        Commands::Demo => {
            let ctx = load_context(cli.config, cli.verbose, cli.log_file)?;
            handlers::handle_demo(ctx)
        }
        Commands::Schema { output } => {
            let ctx = load_context(cli.config, cli.verbose, cli.log_file)?;
            handlers::handle_schema(ctx, output)
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    logging::init(verbose, log_file).context("Failed to initialize logging")
}

fn load_context(
    config_path: Option<PathBuf>,
    verbose: bool,
    log_file: Option<PathBuf>,
) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = RosterConfig::resolve(config_path.as_deref(), &cwd)
        .context("Failed to load rosterql configuration")?;

    init_logging(verbose, log_file.or_else(|| config.logging.file.clone()))?;
    tracing::debug!(
        limit_depth = config.schema.limit_depth,
        limit_complexity = config.schema.limit_complexity,
        anonymous = config.request.anonymous,
        "Configuration resolved"
    );

    Ok(CommandContext::new(config))
}
