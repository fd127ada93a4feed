//! vaic-store CLI - Maintenance tool for the VAIC contest data store
//!
//! Usage:
//!   vaic-store summary            - Record counts and sizes
//!   vaic-store list <collection>  - Print a collection as JSON
//!   vaic-store export <scope>     - Export JSON (all, users, contests, events, forum)
//!   vaic-store import <scope> F   - Replace data from an export file
//!   vaic-store reset --yes        - Restore built-in defaults

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;
use vaic_store::{Config, SqliteStore, Store};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // Initialize logging; RUST_LOG wins over the config file
    let log_level = if cli.verbose {
        "vaic_store=debug".to_string()
    } else {
        config.logging.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let backend = SqliteStore::open(config.database_path())?;
    let mut store = Store::open_namespaced(backend, &config.namespace);

    match cli.command {
        Commands::Summary { json } => cli::commands::summary(&store, json),
        Commands::List { collection } => cli::commands::list(&store, collection.into()),
        Commands::Export { scope, output } => {
            cli::commands::export(&store, scope, output.as_deref())
        }
        Commands::Import { scope, file } => cli::commands::import(&mut store, scope, &file),
        Commands::Update {
            collection,
            id,
            patch,
        } => cli::commands::update(&mut store, collection.into(), &id, &patch),
        Commands::Delete { collection, id } => {
            cli::commands::delete(&mut store, collection.into(), &id)
        }
        Commands::Reset { yes } => cli::commands::reset(&mut store, yes),
    }
}
