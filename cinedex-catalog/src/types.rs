//! Data model types for the movie catalog.
//!
//! `MovieRecord` is a persisted row; `NewMovie` and `MovieUpdate` are the
//! write-side shapes for inserts and partial updates.

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, validate_rating};

// ── Record ──────────────────────────────────────────────────────────────────

/// A movie as stored in the catalog.
///
/// Field order matches the export document: `id` first, then the five
/// user-supplied fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
}

impl MovieRecord {
    /// The record without its id, e.g. for re-importing into another store.
    pub fn to_new(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            director: self.director.clone(),
            genre: self.genre.clone(),
            year: self.year,
            rating: self.rating,
        }
    }
}

// ── New movie ───────────────────────────────────────────────────────────────

/// A movie that has not been stored yet. Also the element type of the
/// import document; an `id` key in the input is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            year,
            rating,
        }
    }

    /// Check the required text fields and the rating bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("director", &self.director)?;
        require_text("genre", &self.genre)?;
        validate_rating(self.rating)
    }
}

// ── Partial update ──────────────────────────────────────────────────────────

/// A partial update. `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

impl MovieUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.rating.is_none()
    }

    /// Check only the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(director) = &self.director {
            require_text("director", director)?;
        }
        if let Some(genre) = &self.genre {
            require_text("genre", genre)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    /// Apply the present fields to a record in memory.
    pub fn apply_to(&self, record: &mut MovieRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(director) = &self.director {
            record.director = director.clone();
        }
        if let Some(genre) = &self.genre {
            record.genre = genre.clone();
        }
        if let Some(year) = self.year {
            record.year = year;
        }
        if let Some(rating) = self.rating {
            record.rating = rating;
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
