/// Bands API routes
use crate::{
    error::{Result, ServerError},
    links,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use encore_core::query::{build_sort, has_valid_fields, shape, BandQuery};
use encore_core::types::{Band, BandDto, BandId, CreateBand};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct FieldsQuery {
    #[serde(default)]
    pub fields: Option<String>,
}

/// GET /api/bands
///
/// Paged, filtered, sorted, and shaped band collection. Pagination
/// metadata travels in the `Pagination` response header; the body wraps
/// the shaped bands together with collection-level links.
pub async fn list_bands(
    State(state): State<AppState>,
    Query(query): Query<BandQuery>,
) -> Result<impl IntoResponse> {
    let mapping = state.mappings.mapping_for::<BandDto, Band>()?;

    if !mapping.is_valid_order_by(&query.order_by) {
        return Err(ServerError::BadRequest(format!(
            "orderBy references unmapped fields: {}",
            query.order_by
        )));
    }
    if !has_valid_fields::<BandDto>(query.fields.as_deref()) {
        return Err(ServerError::BadRequest(format!(
            "fields references unknown fields: {}",
            query.fields.as_deref().unwrap_or_default()
        )));
    }

    let sort = build_sort(&query.order_by, mapping)?;
    let page = encore_storage::bands::list(&state.pool, &query, &sort).await?;

    let metadata = json!({
        "totalCount": page.total_count,
        "pageSize": page.page_size,
        "currentPage": page.current_page,
        "totalPages": page.total_pages,
    });
    let mut headers = HeaderMap::new();
    headers.insert(
        "Pagination",
        HeaderValue::from_str(&metadata.to_string())
            .map_err(|e| ServerError::Internal(e.to_string()))?,
    );

    let collection_links = links::bands_collection_links(&query, page.has_next(), page.has_previous());

    let mut value = Vec::with_capacity(page.items.len());
    for band in &page.items {
        let dto = BandDto::from(band);
        let mut shaped = shape(&dto, query.fields.as_deref())?;
        shaped.insert("links".to_string(), json!(links::band_links(&dto.id, None)));
        value.push(Value::Object(shaped));
    }

    let body = json!({
        "value": value,
        "links": collection_links,
    });

    Ok((headers, Json(body)))
}

/// GET /api/bands/:band_id
pub async fn get_band(
    Path(band_id): Path<String>,
    Query(query): Query<FieldsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    if !has_valid_fields::<BandDto>(query.fields.as_deref()) {
        return Err(ServerError::BadRequest(format!(
            "fields references unknown fields: {}",
            query.fields.as_deref().unwrap_or_default()
        )));
    }

    let band_id = BandId::new(band_id);
    let band = encore_storage::bands::get_by_id(&state.pool, &band_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Band not found".to_string()))?;

    let dto = BandDto::from(&band);
    let mut shaped = shape(&dto, query.fields.as_deref())?;
    shaped.insert(
        "links".to_string(),
        json!(links::band_links(&band_id, query.fields.as_deref())),
    );

    Ok(Json(Value::Object(shaped)))
}

/// POST /api/bands
pub async fn create_band(
    State(state): State<AppState>,
    Json(band): Json<CreateBand>,
) -> Result<impl IntoResponse> {
    let errors = band.validate();
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let band = encore_storage::bands::create(&state.pool, band).await?;

    let dto = BandDto::from(&band);
    let mut shaped = shape(&dto, None)?;
    shaped.insert("links".to_string(), json!(links::band_links(&band.id, None)));

    let location = format!("/api/bands/{}", band.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Value::Object(shaped)),
    ))
}

/// DELETE /api/bands/:band_id
///
/// Albums cascade with their band.
pub async fn delete_band(
    Path(band_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let band_id = BandId::new(band_id);

    if !encore_storage::bands::delete(&state.pool, &band_id).await? {
        return Err(ServerError::NotFound("Band not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
