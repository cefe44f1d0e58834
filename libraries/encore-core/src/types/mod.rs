mod album;
mod band;
mod ids;

pub use album::{Album, AlbumDto, AlbumPatch, CreateAlbum, UpdateAlbum};
pub use band::{Band, BandDto, CreateBand};
pub use ids::{AlbumId, BandId};
