use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::IdPath;
use axum_helpers::errors::responses::{
    BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;

use super::LOCATIONS_TAG;
use crate::error::{LocationError, LocationResult};
use crate::models::{Locality, LocalitySummary};
use crate::repository::LocalityRepository;
use crate::service::LocalityService;

/// Public locality lookups used by the address form
pub fn locality_router<L: LocalityRepository + 'static>(service: LocalityService<L>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/localities", get(list_localities))
        .route("/localities/{id}", get(get_locality))
        .with_state(shared_service)
}

/// List localities by postal code
#[utoipa::path(
    get,
    path = "/localities",
    tag = LOCATIONS_TAG,
    responses(
        (status = 200, description = "All localities", body = Vec<Locality>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_localities<L: LocalityRepository>(
    State(service): State<Arc<LocalityService<L>>>,
) -> LocationResult<Json<Vec<Locality>>> {
    Ok(Json(service.find_all().await?))
}

/// Postal code, town, province and main town of one locality
#[utoipa::path(
    get,
    path = "/localities/{id}",
    tag = LOCATIONS_TAG,
    params(("id" = i32, Path, description = "Locality id")),
    responses(
        (status = 200, description = "Locality", body = LocalitySummary),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn get_locality<L: LocalityRepository>(
    State(service): State<Arc<LocalityService<L>>>,
    IdPath(id): IdPath,
) -> LocationResult<Json<LocalitySummary>> {
    let locality = service
        .find_by_id(id)
        .await?
        .ok_or(LocationError::LocalityNotFound(id))?;

    Ok(Json(locality.into()))
}
