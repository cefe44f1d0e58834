//! Request validation
//!
//! Explicit validation functions per request type. Each returns the full
//! list of problems rather than stopping at the first, so clients can fix
//! a bad request in one round trip.

use crate::types::{CreateAlbum, CreateBand, UpdateAlbum};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a band name
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of a band's main genre
pub const MAX_GENRE_LEN: usize = 50;
/// Maximum length of an album title
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum length of an album description
pub const MAX_DESCRIPTION_LEN: usize = 400;

/// Earliest accepted founding year
const MIN_FOUNDED_YEAR: i32 = 1500;

/// A single field-level validation problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl CreateBand {
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "name is required"));
        } else if self.name.chars().count() > MAX_NAME_LEN {
            errors.push(ValidationError::new(
                "name",
                format!("name must be at most {MAX_NAME_LEN} characters"),
            ));
        }

        if self.main_genre.trim().is_empty() {
            errors.push(ValidationError::new("mainGenre", "mainGenre is required"));
        } else if self.main_genre.chars().count() > MAX_GENRE_LEN {
            errors.push(ValidationError::new(
                "mainGenre",
                format!("mainGenre must be at most {MAX_GENRE_LEN} characters"),
            ));
        }

        let current_year = Utc::now().year();
        if self.founded_year < MIN_FOUNDED_YEAR || self.founded_year > current_year {
            errors.push(ValidationError::new(
                "foundedYear",
                format!("foundedYear must be between {MIN_FOUNDED_YEAR} and {current_year}"),
            ));
        }

        errors
    }
}

impl CreateAlbum {
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_title_and_description(&self.title, self.description.as_deref(), &mut errors);
        errors
    }
}

impl UpdateAlbum {
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_title_and_description(&self.title, Some(&self.description), &mut errors);

        // Updates, unlike creation, require a description.
        if self.description.trim().is_empty() {
            errors.push(ValidationError::new(
                "description",
                "description is required",
            ));
        }

        errors
    }
}

/// Checks shared between the album creation and update documents.
fn check_title_and_description(
    title: &str,
    description: Option<&str>,
    errors: &mut Vec<ValidationError>,
) {
    if title.trim().is_empty() {
        errors.push(ValidationError::new("title", "title is required"));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(ValidationError::new(
            "title",
            format!("title must be at most {MAX_TITLE_LEN} characters"),
        ));
    }

    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(ValidationError::new(
                "description",
                format!("description must be at most {MAX_DESCRIPTION_LEN} characters"),
            ));
        }

        if !title.trim().is_empty() && description == title {
            errors.push(ValidationError::new(
                "description",
                "description must be different from the title",
            ));
        }
    }
}
