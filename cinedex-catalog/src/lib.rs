//! Movie catalog data model types and field validation.
//!
//! This crate defines the movie record model without any database
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `cinedex-db` for persistence.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{
    RATING_MAX, RATING_MIN, ValidationError, parse_rating, parse_year, validate_rating,
};
