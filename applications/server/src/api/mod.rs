/// API route modules
pub mod albums;
pub mod band_collections;
pub mod bands;
pub mod health;
