use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "counselflow")]
#[command(about = "Browse CounselFlow legal-operations data from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], global = true)]
    pub log_level: Option<String>,

    #[arg(long, value_parser = ["plain", "json"], default_value = "plain", global = true)]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filtered, sorted records of a page.
    List {
        /// Page path, e.g. /contracts or /disputes.
        route: String,

        #[arg(long, default_value = "")]
        search: String,

        /// Categorical filter as field=value; `All` clears it.
        #[arg(long = "filter")]
        filters: Vec<String>,

        /// Sort key; defaults to the page's initial sort.
        #[arg(long, conflicts_with = "unsorted")]
        sort: Option<String>,

        /// Keep fixture order.
        #[arg(long)]
        unsorted: bool,
    },

    /// Summary cards of a page.
    Summary {
        route: String,

        /// Reference date for expiry and overdue counts; defaults to today.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Options of one filter select.
    Facets { route: String, field: String },

    /// Compliance monitor over a compliance store.
    Compliance {
        /// SQLite store; falls back to `compliance_db` from the config.
        #[arg(long, conflicts_with = "demo")]
        db: Option<PathBuf>,

        /// Use an in-memory store seeded with demo rows.
        #[arg(long)]
        demo: bool,

        /// Framework id or name; `All` shows every framework.
        #[arg(long, default_value = "All")]
        framework: String,
    },

    /// Every known path and alias.
    Routes,
}
