//! Field validation and parsing for user-supplied values.

use thiserror::Error;

/// Lowest accepted rating (inclusive).
pub const RATING_MIN: f64 = 1.0;
/// Highest accepted rating (inclusive).
pub const RATING_MAX: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Rating must be between 1.0 and 10.0, got {0}")]
    RatingOutOfRange(f64),
    #[error("Invalid year: '{0}'")]
    InvalidYear(String),
    #[error("Invalid rating: '{0}'")]
    InvalidRating(String),
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Check that a rating lies in `[RATING_MIN, RATING_MAX]`. NaN is rejected.
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

/// Parse a year typed by the user.
pub fn parse_year(input: &str) -> Result<i32, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))
}

/// Parse a rating typed by the user and check its bound.
pub fn parse_rating(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let rating = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidRating(trimmed.to_string()))?;
    validate_rating(rating)?;
    Ok(rating)
}
