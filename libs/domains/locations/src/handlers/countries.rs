use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::IdPath;
use axum_helpers::errors::responses::{
    BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;

use super::LOCATIONS_TAG;
use crate::error::{LocationError, LocationResult};
use crate::models::Country;
use crate::repository::CountryRepository;
use crate::service::CountryService;

pub fn country_router<C: CountryRepository + 'static>(service: CountryService<C>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/{id}", get(get_country))
        .with_state(shared_service)
}

/// List countries
#[utoipa::path(
    get,
    path = "/countries",
    tag = LOCATIONS_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<Country>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_countries<C: CountryRepository>(
    State(service): State<Arc<CountryService<C>>>,
) -> LocationResult<Json<Vec<Country>>> {
    Ok(Json(service.find_all().await?))
}

/// Get one country
#[utoipa::path(
    get,
    path = "/countries/{id}",
    tag = LOCATIONS_TAG,
    params(("id" = i32, Path, description = "Country id")),
    responses(
        (status = 200, description = "Country", body = Country),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn get_country<C: CountryRepository>(
    State(service): State<Arc<CountryService<C>>>,
    IdPath(id): IdPath,
) -> LocationResult<Json<Country>> {
    service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(LocationError::CountryNotFound(id))
}
