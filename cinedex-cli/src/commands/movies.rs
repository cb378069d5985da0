//! One-shot record commands: list, add, update, delete.

use cinedex_catalog::{MovieUpdate, NewMovie};
use cinedex_db::{MovieStore, UpdateOutcome};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::UpdateArgs;

use super::print_movies;

pub(crate) fn run_list(store: &MovieStore, title: Option<String>) -> Result<(), CliError> {
    let movies = store.search(title.as_deref())?;
    print_movies(&movies);
    if !movies.is_empty() {
        crate::log_blank();
        log::info!("{} movie(s)", movies.len());
    }
    Ok(())
}

pub(crate) fn run_add(store: &MovieStore, movie: NewMovie) -> Result<(), CliError> {
    let id = store.insert_one(&movie)?;
    log::info!(
        "Added movie {}: {}",
        id.if_supports_color(Stdout, |t| t.cyan()),
        movie.title,
    );
    Ok(())
}

impl From<UpdateArgs> for MovieUpdate {
    fn from(args: UpdateArgs) -> Self {
        MovieUpdate {
            title: args.title,
            director: args.director,
            genre: args.genre,
            year: args.year,
            rating: args.rating,
        }
    }
}

pub(crate) fn run_update(store: &MovieStore, id: i64, fields: UpdateArgs) -> Result<(), CliError> {
    let update = MovieUpdate::from(fields);
    if update.is_empty() {
        log::info!("Nothing to update.");
        return Ok(());
    }

    // The store updates by id without checking existence; report unknown ids here.
    let Some(mut movie) = store.get(id)? else {
        log::warn!("No movie with ID {}", id);
        return Ok(());
    };

    match store.update_by_id(id, &update)? {
        UpdateOutcome::NothingToUpdate => log::info!("Nothing to update."),
        UpdateOutcome::Updated(_) => {
            log::info!("Movie {} updated.", id);
            update.apply_to(&mut movie);
            print_movies(&[movie]);
        }
    }
    Ok(())
}

pub(crate) fn run_delete(
    store: &MovieStore,
    title: Option<String>,
    all: bool,
    yes: bool,
) -> Result<(), CliError> {
    if all {
        if !yes {
            let count = store.count()?;
            log::warn!("This will permanently delete all {} movie(s).", count);
            log::info!("Re-run with --yes to proceed:");
            log::info!("  cinedex delete --all --yes");
            return Ok(());
        }
        let removed = store.delete_all()?;
        log::info!("Deleted all movies ({} removed).", removed);
        return Ok(());
    }

    let title = title.unwrap_or_default();
    let movies = store.search(Some(&title))?;
    print_movies(&movies);
    if movies.is_empty() {
        return Ok(());
    }

    if !yes {
        crate::log_blank();
        log::warn!("The {} movie(s) above would be deleted.", movies.len());
        log::info!("Re-run with --yes to proceed.");
        return Ok(());
    }

    let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
    let removed = store.delete_by_ids(&ids)?;
    log::info!("Deleted {} movie(s).", removed);
    Ok(())
}
