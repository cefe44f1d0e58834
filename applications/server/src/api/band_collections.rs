/// Band collection API routes
///
/// Bulk retrieval and creation of bands in one request.
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
use encore_core::types::{BandDto, BandId, CreateBand};
use encore_core::validate::ValidationError;

/// GET /api/bandcollections/:ids
///
/// `ids` is a comma-separated list. The whole collection must resolve;
/// any unknown id turns the request into a 404.
pub async fn get_band_collection(
    Path(ids): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BandDto>>> {
    let ids: Vec<BandId> = ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(BandId::new)
        .collect();

    if ids.is_empty() {
        return Err(ServerError::BadRequest("no band ids supplied".to_string()));
    }

    let bands = encore_storage::bands::get_many(&state.pool, &ids).await?;

    if bands.len() != ids.len() {
        return Err(ServerError::NotFound(
            "One or more bands were not found".to_string(),
        ));
    }

    Ok(Json(bands.iter().map(BandDto::from).collect()))
}

/// POST /api/bandcollections
pub async fn create_band_collection(
    State(state): State<AppState>,
    Json(bands): Json<Vec<CreateBand>>,
) -> Result<impl IntoResponse> {
    let errors: Vec<ValidationError> = bands.iter().flat_map(CreateBand::validate).collect();
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let created = encore_storage::bands::create_many(&state.pool, bands).await?;

    let ids = created
        .iter()
        .map(|band| band.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let dtos: Vec<BandDto> = created.iter().map(BandDto::from).collect();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/bandcollections/{ids}"))],
        Json(dtos),
    ))
}
