//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Manage a local catalog of movies", long_about = None)]
pub(crate) struct Cli {
    /// Path to the movie database file (default: movies.db, or $CINEDEX_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Command to run; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Optional field values for `update`. Omitted fields keep their value.
#[derive(Args, Clone, Default)]
pub(crate) struct UpdateArgs {
    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New director
    #[arg(long)]
    pub director: Option<String>,

    /// New genre
    #[arg(long)]
    pub genre: Option<String>,

    /// New release year
    #[arg(long)]
    pub year: Option<i32>,

    /// New rating (1.0 - 10.0)
    #[arg(long)]
    pub rating: Option<f64>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive menu (default)
    Shell,

    /// List movies, optionally filtered by a title substring
    List {
        /// Title substring to search for (LIKE wildcards % and _ apply)
        title: Option<String>,
    },

    /// Add a movie
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        director: String,

        #[arg(long)]
        genre: String,

        /// Release year
        #[arg(long)]
        year: i32,

        /// Rating (1.0 - 10.0)
        #[arg(long)]
        rating: f64,
    },

    /// Change fields of the movie with the given ID
    Update {
        /// Movie ID (see `list`)
        id: i64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete movies matching a title, or all movies
    Delete {
        /// Title substring of the movies to delete
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        title: Option<String>,

        /// Delete every movie
        #[arg(long)]
        all: bool,

        /// Confirm the deletion (required; without this, shows preview only)
        #[arg(long)]
        yes: bool,
    },

    /// Import movies from a JSON file (default: movies.json)
    Import {
        /// JSON file to read
        path: Option<PathBuf>,
    },

    /// Export movies to a JSON file (default: exported.json)
    Export {
        /// JSON file to write (overwritten if it exists)
        path: Option<PathBuf>,

        /// Only export movies whose title contains this substring
        #[arg(long)]
        title: Option<String>,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved paths and where each came from
    Show,

    /// Print the settings file path
    Path,

    /// Save a default database path in the settings file
    SetDb {
        /// Database file path
        path: PathBuf,
    },

    /// Remove the saved database path from the settings file
    ClearDb,
}
