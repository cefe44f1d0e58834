use encore_core::error::{CoreError, Result};
use encore_core::types::*;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const ALBUM_COLUMNS: &str = "id, band_id, title, description, created_at, updated_at";

fn read_album(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        band_id: row.get("band_id"),
        title: row.get("title"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn get_for_band(pool: &SqlitePool, band_id: &BandId) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!(
        "SELECT {ALBUM_COLUMNS} FROM albums WHERE band_id = ? ORDER BY title, id"
    ))
    .bind(band_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(read_album).collect())
}

pub async fn get_by_id(
    pool: &SqlitePool,
    band_id: &BandId,
    album_id: &AlbumId,
) -> Result<Option<Album>> {
    let row = sqlx::query(&format!(
        "SELECT {ALBUM_COLUMNS} FROM albums WHERE band_id = ? AND id = ?"
    ))
    .bind(band_id)
    .bind(album_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(read_album))
}

pub async fn create(pool: &SqlitePool, band_id: &BandId, album: CreateAlbum) -> Result<Album> {
    let id = AlbumId::generate();

    sqlx::query("INSERT INTO albums (id, band_id, title, description) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(band_id)
        .bind(&album.title)
        .bind(&album.description)
        .execute(pool)
        .await?;

    get_by_id(pool, band_id, &id)
        .await?
        .ok_or_else(|| CoreError::database("failed to retrieve created album"))
}

/// Full update of an album. Returns the updated row, or `None` when no
/// album with that id belongs to the band.
pub async fn update(
    pool: &SqlitePool,
    band_id: &BandId,
    album_id: &AlbumId,
    album: UpdateAlbum,
) -> Result<Option<Album>> {
    let result = sqlx::query(
        "UPDATE albums SET title = ?, description = ?, updated_at = datetime('now')
         WHERE band_id = ? AND id = ?",
    )
    .bind(&album.title)
    .bind(&album.description)
    .bind(band_id)
    .bind(album_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_by_id(pool, band_id, album_id).await
}

/// Returns whether a row was actually removed.
pub async fn delete(pool: &SqlitePool, band_id: &BandId, album_id: &AlbumId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM albums WHERE band_id = ? AND id = ?")
        .bind(band_id)
        .bind(album_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
