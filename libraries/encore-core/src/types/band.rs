//! Band types

use super::BandId;
use crate::query::shape::Shape;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub main_genre: String,
    pub founded_year: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new band
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBand {
    pub name: String,
    pub main_genre: String,
    pub founded_year: i32,
}

/// Client-facing band representation. Sorting and shaping operate on this
/// surface, not on the stored entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDto {
    pub id: BandId,
    pub name: String,
    pub main_genre: String,
    pub founded_years_ago: i32,
}

impl From<&Band> for BandDto {
    fn from(band: &Band) -> Self {
        Self {
            id: band.id.clone(),
            name: band.name.clone(),
            main_genre: band.main_genre.clone(),
            founded_years_ago: Utc::now().year() - band.founded_year,
        }
    }
}

impl From<Band> for BandDto {
    fn from(band: Band) -> Self {
        Self::from(&band)
    }
}

impl Shape for BandDto {
    fn fields() -> &'static [&'static str] {
        &["id", "name", "mainGenre", "foundedYearsAgo"]
    }

    fn field_value(&self, field: &str) -> Value {
        match field {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "mainGenre" => json!(self.main_genre),
            "foundedYearsAgo" => json!(self.founded_years_ago),
            _ => Value::Null,
        }
    }
}
