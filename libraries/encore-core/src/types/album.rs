//! Album types

use super::{AlbumId, BandId};
use serde::{Deserialize, Serialize};

/// An album, always owned by a band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub band_id: BandId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub description: Option<String>,
}

/// Data for a full album update. Unlike creation, the description is
/// required here; the two operations are distinct types on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAlbum {
    pub title: String,
    pub description: String,
}

/// Partial album update. Absent fields keep their stored values; the
/// merged result is validated as a full update before it is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Client-facing album representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: AlbumId,
    pub title: String,
    pub description: Option<String>,
    pub band_id: BandId,
}

impl From<&Album> for AlbumDto {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.clone(),
            title: album.title.clone(),
            description: album.description.clone(),
            band_id: album.band_id.clone(),
        }
    }
}

impl From<Album> for AlbumDto {
    fn from(album: Album) -> Self {
        Self::from(&album)
    }
}

impl AlbumPatch {
    /// Merge this patch onto an existing album, producing the full update
    /// document to validate and persist.
    pub fn apply_to(&self, album: &Album) -> UpdateAlbum {
        UpdateAlbum {
            title: self.title.clone().unwrap_or_else(|| album.title.clone()),
            description: self
                .description
                .clone()
                .or_else(|| album.description.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_album() -> Album {
        Album {
            id: AlbumId::new("a1"),
            band_id: BandId::new("b1"),
            title: "Meddle".to_string(),
            description: Some("Sixth studio album".to_string()),
            created_at: "2024-01-01 00:00:00".to_string(),
            updated_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn patch_with_only_description_keeps_title() {
        let patch = AlbumPatch {
            title: None,
            description: Some("Recorded in 1971".to_string()),
        };

        let merged = patch.apply_to(&stored_album());
        assert_eq!(merged.title, "Meddle");
        assert_eq!(merged.description, "Recorded in 1971");
    }

    #[test]
    fn empty_patch_reproduces_stored_values() {
        let merged = AlbumPatch::default().apply_to(&stored_album());
        assert_eq!(merged.title, "Meddle");
        assert_eq!(merged.description, "Sixth studio album");
    }
}
