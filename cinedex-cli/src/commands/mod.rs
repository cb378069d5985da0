pub(crate) mod config;
pub(crate) mod movies;
pub(crate) mod shell;
pub(crate) mod transfer;

use cinedex_catalog::MovieRecord;
use cinedex_db::MovieStore;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Print records as the fixed-width movie table.
pub(crate) fn print_movies(movies: &[MovieRecord]) {
    let lines = cinedex_lib::render_table(movies);
    if movies.is_empty() {
        for line in &lines {
            log::info!("{}", line);
        }
        return;
    }

    crate::log_blank();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.bold()));
        } else {
            log::info!("{}", line);
        }
    }
}

/// Search that never fails: a storage fault is logged and yields no rows,
/// which the table renders the same way as an empty result.
pub(crate) fn search_or_empty(store: &MovieStore, title: Option<&str>) -> Vec<MovieRecord> {
    store.search(title).unwrap_or_else(|e| {
        log::error!("Search failed: {}", e);
        Vec::new()
    })
}
