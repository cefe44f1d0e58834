//! Encore Server Library
//!
//! REST API over the band catalog: paged/filtered/sorted band listings
//! with field shaping and hypermedia links, plus band-scoped album CRUD.
//!
//! This library exposes the router and core components for testing.

pub mod api;
pub mod config;
pub mod error;
pub mod links;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::routing::get;
use axum::Router;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        // Bands
        .route(
            "/bands",
            get(api::bands::list_bands).post(api::bands::create_band),
        )
        .route(
            "/bands/:band_id",
            get(api::bands::get_band).delete(api::bands::delete_band),
        )
        // Band collections
        .route(
            "/bandcollections",
            axum::routing::post(api::band_collections::create_band_collection),
        )
        .route(
            "/bandcollections/:ids",
            get(api::band_collections::get_band_collection),
        )
        // Albums (band-scoped)
        .route(
            "/bands/:band_id/albums",
            get(api::albums::list_albums).post(api::albums::create_album),
        )
        .route(
            "/bands/:band_id/albums/:album_id",
            get(api::albums::get_album)
                .put(api::albums::update_album)
                .patch(api::albums::patch_album)
                .delete(api::albums::delete_album),
        );

    Router::new().nest("/api", routes).with_state(state)
}
