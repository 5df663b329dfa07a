//! Terminal front end for the CounselFlow dashboard.
//!
//! # Responsibility
//! - Resolve a dashboard route and render its list view, summary or facets.
//! - Run the compliance monitor against a compliance store.

mod args;
mod commands;
mod render;

use anyhow::{anyhow, Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use commands::{ComplianceArgs, ListArgs, OutputFormat};
use counselflow_core::{init_logging, AppConfig, AppContext, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let target = LogTarget::from_dir(config.log_dir.as_deref());
    let level = target.effective_level(cli.log_level.as_deref(), &config.log_level);
    init_logging(level, &target)
        .map_err(|message| anyhow!(message))
        .context("failed to initialize logging")?;

    let context = AppContext::bootstrap(config).context("failed to load demo data")?;
    let format = OutputFormat::parse(&cli.format);

    match cli.command {
        Commands::List {
            route,
            search,
            filters,
            sort,
            unsorted,
        } => {
            let args = ListArgs {
                search,
                filters,
                sort,
                unsorted,
            };
            commands::list(&context, &route, &args, format)
        }
        Commands::Summary { route, as_of } => commands::summary(&context, &route, as_of, format),
        Commands::Facets { route, field } => commands::facets(&context, &route, &field, format),
        Commands::Compliance {
            db,
            demo,
            framework,
        } => {
            let args = ComplianceArgs {
                db,
                demo,
                framework,
            };
            commands::compliance(&context, &args, format)
        }
        Commands::Routes => {
            commands::routes();
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config `{}`", path.display()))?,
        None => AppConfig::default(),
    };

    match &cli.log_level {
        Some(level) => Ok(config.with_log_level(level)?),
        None => Ok(config),
    }
}
