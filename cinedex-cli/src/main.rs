//! cinedex CLI
//!
//! Command-line interface and interactive menu for a local movie catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::io;

use clap::Parser;

use cinedex_catalog::NewMovie;
use cinedex_db::MovieStore;
use cinedex_lib::{PathOverrides, Settings};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

/// Print an empty line through the logger so it respects `--quiet` and `--logfile`.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = PathOverrides {
        db: cli.db,
        ..Default::default()
    };
    let settings = Settings::resolve(&overrides);
    // Config commands don't need the database
    let command = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Config { action } => return commands::config::run_config(action, &settings),
        command => command,
    };

    let db_path = &settings.db_path.path;
    let store = MovieStore::open(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open movie database {}: {}",
            db_path.display(),
            e
        ))
    })?;

    let result = dispatch(command, &store, &settings);
    // Close exactly once, whether or not the command succeeded
    let closed = store.close();
    result?;
    closed?;
    Ok(())
}

fn dispatch(command: Commands, store: &MovieStore, settings: &Settings) -> Result<(), CliError> {
    match command {
        Commands::Shell => {
            let stdin = io::stdin();
            commands::shell::Shell::new(store, settings, stdin.lock()).run();
            Ok(())
        }
        Commands::List { title } => commands::movies::run_list(store, title),
        Commands::Add {
            title,
            director,
            genre,
            year,
            rating,
        } => commands::movies::run_add(store, NewMovie::new(title, director, genre, year, rating)),
        Commands::Update { id, fields } => commands::movies::run_update(store, id, fields),
        Commands::Delete { title, all, yes } => {
            commands::movies::run_delete(store, title, all, yes)
        }
        Commands::Import { path } => {
            let path = path.unwrap_or_else(|| settings.import_path.path.clone());
            commands::transfer::run_import(store, &path)
        }
        Commands::Export { path, title } => {
            let path = path.unwrap_or_else(|| settings.export_path.path.clone());
            commands::transfer::run_export(store, &path, title.as_deref())
        }
        Commands::Config { .. } => {
            unreachable!("config commands are handled before the store is opened")
        }
    }
}
