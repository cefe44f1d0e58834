/// Albums API routes
///
/// Every route is scoped to an existing band; a missing band is a 404
/// before any album logic runs.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use encore_core::types::{AlbumDto, AlbumId, AlbumPatch, BandId, CreateAlbum, UpdateAlbum};
use sqlx::SqlitePool;

async fn ensure_band_exists(pool: &SqlitePool, band_id: &BandId) -> Result<()> {
    if !encore_storage::bands::exists(pool, band_id).await? {
        return Err(ServerError::NotFound("Band not found".to_string()));
    }
    Ok(())
}

/// GET /api/bands/:band_id/albums
pub async fn list_albums(
    Path(band_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AlbumDto>>> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    let albums = encore_storage::albums::get_for_band(&state.pool, &band_id).await?;
    Ok(Json(albums.iter().map(AlbumDto::from).collect()))
}

/// GET /api/bands/:band_id/albums/:album_id
pub async fn get_album(
    Path((band_id, album_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<AlbumDto>> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    let album = encore_storage::albums::get_by_id(&state.pool, &band_id, &AlbumId::new(album_id))
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;

    Ok(Json(AlbumDto::from(&album)))
}

/// POST /api/bands/:band_id/albums
pub async fn create_album(
    Path(band_id): Path<String>,
    State(state): State<AppState>,
    Json(album): Json<CreateAlbum>,
) -> Result<impl IntoResponse> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    let errors = album.validate();
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let album = encore_storage::albums::create(&state.pool, &band_id, album).await?;

    let location = format!("/api/bands/{}/albums/{}", band_id, album.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AlbumDto::from(&album)),
    ))
}

/// PUT /api/bands/:band_id/albums/:album_id
pub async fn update_album(
    Path((band_id, album_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(update): Json<UpdateAlbum>,
) -> Result<Json<AlbumDto>> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    let errors = update.validate();
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let album = encore_storage::albums::update(&state.pool, &band_id, &AlbumId::new(album_id), update)
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;

    Ok(Json(AlbumDto::from(&album)))
}

/// PATCH /api/bands/:band_id/albums/:album_id
///
/// Partial update: absent fields keep their stored values. The merged
/// document is validated exactly like a full update before persisting.
pub async fn patch_album(
    Path((band_id, album_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(patch): Json<AlbumPatch>,
) -> Result<Json<AlbumDto>> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    let album_id = AlbumId::new(album_id);
    let album = encore_storage::albums::get_by_id(&state.pool, &band_id, &album_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;

    let update = patch.apply_to(&album);
    let errors = update.validate();
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let album = encore_storage::albums::update(&state.pool, &band_id, &album_id, update)
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;

    Ok(Json(AlbumDto::from(&album)))
}

/// DELETE /api/bands/:band_id/albums/:album_id
pub async fn delete_album(
    Path((band_id, album_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let band_id = BandId::new(band_id);
    ensure_band_exists(&state.pool, &band_id).await?;

    if !encore_storage::albums::delete(&state.pool, &band_id, &AlbumId::new(album_id)).await? {
        return Err(ServerError::NotFound("Album not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
