use std::path::Path;

use cinedex_db::MovieStore;
use cinedex_transfer::LogProgress;

use crate::CliError;

use super::print_movies;

pub(crate) fn run_import(store: &MovieStore, path: &Path) -> Result<(), CliError> {
    // LogProgress reports the imported count on completion
    cinedex_transfer::import_file(store.connection(), path, Some(&LogProgress))?;
    Ok(())
}

/// Export all movies, or only those whose title contains `title`.
///
/// Nothing is written when the selection is empty.
pub(crate) fn run_export(
    store: &MovieStore,
    path: &Path,
    title: Option<&str>,
) -> Result<(), CliError> {
    let movies = store.search(title)?;
    if movies.is_empty() {
        print_movies(&movies);
        return Ok(());
    }

    let written = cinedex_transfer::export_file(path, &movies)?;
    log::info!("Exported {} movie(s) to {}", written, path.display());
    Ok(())
}
