/// Shared application state
use encore_core::query::{MappingRegistry, PropertyMapping, PropertyMappingValue};
use encore_core::types::{Band, BandDto};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub mappings: Arc<MappingRegistry>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            mappings: Arc::new(build_mapping_registry()),
        }
    }
}

/// Build the process-wide property-mapping registry. Constructed once at
/// startup and handed around behind an `Arc`; never mutated afterwards.
pub fn build_mapping_registry() -> MappingRegistry {
    let mut band_mapping = PropertyMapping::new();
    band_mapping.insert("id", PropertyMappingValue::to(vec!["id"]));
    band_mapping.insert("name", PropertyMappingValue::to(vec!["name"]));
    band_mapping.insert("mainGenre", PropertyMappingValue::to(vec!["main_genre"]));
    // "years ago" runs opposite to the stored founding year
    band_mapping.insert(
        "foundedYearsAgo",
        PropertyMappingValue::reverted(vec!["founded_year"]),
    );

    let mut registry = MappingRegistry::new();
    registry.register::<BandDto, Band>(band_mapping);
    registry
}
