//! Interactive menu loop.
//!
//! Each menu action runs to completion and reports its own errors; a failed
//! action never ends the session. The loop stops on the exit choice or when
//! input reaches end of file.

use std::io::{BufRead, Write};

use cinedex_catalog::{MovieUpdate, NewMovie, parse_rating, parse_year};
use cinedex_db::{MovieStore, UpdateOutcome};
use cinedex_lib::Settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{print_movies, search_or_empty, transfer};

const MENU: [&str; 7] = [
    "1. Import movies",
    "2. Search movies",
    "3. Add a movie",
    "4. Modify a movie",
    "5. Delete movies",
    "6. Export movies",
    "7. Exit",
];

pub(crate) struct Shell<'a, R> {
    store: &'a MovieStore,
    settings: &'a Settings,
    input: R,
}

impl<'a, R: BufRead> Shell<'a, R> {
    pub(crate) fn new(store: &'a MovieStore, settings: &'a Settings, input: R) -> Self {
        Self {
            store,
            settings,
            input,
        }
    }

    /// Run the menu until the user exits or input is closed.
    pub(crate) fn run(&mut self) {
        loop {
            print_menu();
            let choice = match self.prompt("Choose an option (1-7)") {
                Ok(choice) => choice,
                Err(_) => break,
            };

            let result = match choice.as_str() {
                "1" => self.import(),
                "2" => self.search(),
                "3" => self.add(),
                "4" => self.modify(),
                "5" => self.delete(),
                "6" => self.export(),
                "7" => {
                    log::info!("Goodbye.");
                    break;
                }
                other => {
                    log::warn!("Invalid option '{}', please try again.", other);
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(CliError::InputClosed) => break,
                Err(e) => log::error!("{}", e),
            }
        }
    }

    // ── Input helpers ───────────────────────────────────────────────────────

    /// Print a prompt and read one trimmed line.
    fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        print!("{}: ", label);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        let answer = self.prompt(&format!("{} (y/n)", question))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// `None` for a blank answer.
    fn prompt_optional(&mut self, label: &str) -> Result<Option<String>, CliError> {
        let value = self.prompt(label)?;
        Ok((!value.is_empty()).then_some(value))
    }

    // ── Menu actions ────────────────────────────────────────────────────────

    fn import(&mut self) -> Result<(), CliError> {
        transfer::run_import(self.store, &self.settings.import_path.path)
    }

    fn search(&mut self) -> Result<(), CliError> {
        let movies = if self.confirm("List all movies?")? {
            search_or_empty(self.store, None)
        } else {
            let title = self.prompt("Title")?;
            search_or_empty(self.store, Some(&title))
        };
        print_movies(&movies);
        Ok(())
    }

    fn add(&mut self) -> Result<(), CliError> {
        let title = self.prompt("Title")?;
        let director = self.prompt("Director")?;
        let genre = self.prompt("Genre")?;
        let year = parse_year(&self.prompt("Year")?)?;
        let rating = parse_rating(&self.prompt("Rating (1.0 - 10.0)")?)?;

        let movie = NewMovie::new(title, director, genre, year, rating);
        self.store.insert_one(&movie)?;
        log::info!("Movie added.");
        Ok(())
    }

    /// Edit the first movie whose title matches; blank answers keep a field.
    fn modify(&mut self) -> Result<(), CliError> {
        let title = self.prompt("Title of the movie to modify")?;
        let movies = search_or_empty(self.store, Some(&title));
        print_movies(&movies);
        let Some(movie) = movies.first() else {
            return Ok(());
        };
        crate::log_blank();
        log::info!(
            "Editing {} (press Enter to keep a value)",
            movie.title.if_supports_color(Stdout, |t| t.bold()),
        );

        let mut update = MovieUpdate::new();
        update.title = self.prompt_optional("New title")?;
        update.director = self.prompt_optional("New director")?;
        update.genre = self.prompt_optional("New genre")?;
        if let Some(year) = self.prompt_optional("New year")? {
            update.year = Some(parse_year(&year)?);
        }
        if let Some(rating) = self.prompt_optional("New rating (1.0 - 10.0)")? {
            update.rating = Some(parse_rating(&rating)?);
        }

        match self.store.update_by_id(movie.id, &update)? {
            UpdateOutcome::NothingToUpdate => log::info!("Nothing to update."),
            UpdateOutcome::Updated(_) => log::info!("Movie updated."),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), CliError> {
        if self.confirm("Delete all movies?")? {
            if self.confirm("Are you sure you want to delete ALL movies?")? {
                let removed = self.store.delete_all()?;
                log::info!("All movies deleted ({} removed).", removed);
            } else {
                log::info!("Delete cancelled.");
            }
            return Ok(());
        }

        let title = self.prompt("Title of the movies to delete")?;
        let movies = search_or_empty(self.store, Some(&title));
        print_movies(&movies);
        if movies.is_empty() {
            return Ok(());
        }

        if self.confirm("Delete these movies?")? {
            // Delete exactly what was shown, not a fresh search
            let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
            let removed = self.store.delete_by_ids(&ids)?;
            log::info!("Deleted {} movie(s).", removed);
        } else {
            log::info!("Delete cancelled.");
        }
        Ok(())
    }

    fn export(&mut self) -> Result<(), CliError> {
        let path = self.settings.export_path.path.clone();
        if self.confirm("Export all movies?")? {
            transfer::run_export(self.store, &path, None)
        } else {
            let title = self.prompt("Title of the movies to export")?;
            transfer::run_export(self.store, &path, Some(&title))
        }
    }
}

fn print_menu() {
    crate::log_blank();
    log::info!(
        "{}",
        "----- Movie Catalog -----".if_supports_color(Stdout, |t| t.bold()),
    );
    for item in MENU {
        log::info!("{}", item);
    }
    log::info!("-------------------------");
}
