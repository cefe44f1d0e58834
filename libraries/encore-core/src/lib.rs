//! Encore Core
//!
//! Domain types, validation, and the query-shaping pipeline for the Encore
//! band catalog. No I/O lives here; the storage and HTTP layers build on
//! these pieces.
//!
//! The query pipeline is the heart of the crate:
//! - **Property mapping**: client-facing sort keys resolved to storage
//!   columns, with optional direction inversion ([`query::mapping`])
//! - **Sort building**: order-by strings turned into ordered column
//!   instructions ([`query::sort`])
//! - **Field projection**: sparse, order-preserving views of DTOs for
//!   serialization ([`query::shape`])
//! - **Pagination**: [`query::paging::PagedList`] with the counts needed
//!   for adjacent-page links

#![forbid(unsafe_code)]

pub mod error;
pub mod query;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use validate::ValidationError;

pub use types::{
    Album, AlbumDto, AlbumId, AlbumPatch, Band, BandDto, BandId, CreateAlbum, CreateBand,
    UpdateAlbum,
};
