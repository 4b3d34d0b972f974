use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::IdPath;
use axum_helpers::errors::responses::{
    BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;

use super::CATALOG_TAG;
use crate::error::BookingResult;
use crate::models::{
    Closure, Discount, Field, Hall, Sport, SportField, SportFilter, Subscription, TimeSlot,
};
use crate::repository::BookingRepository;
use crate::service::CatalogService;

/// Public catalog routes
pub fn catalog_router<R: BookingRepository + 'static>(service: Arc<CatalogService<R>>) -> Router {
    Router::new()
        .route("/sports", get(list_sports))
        .route("/halls", get(list_halls))
        .route("/halls/{id}/fields", get(list_hall_fields))
        .route("/sport-fields", get(list_sport_fields))
        .route("/sport-fields/{id}/closures", get(list_closures))
        .route("/time-slots", get(list_time_slots))
        .route("/subscriptions", get(list_subscriptions))
        .route("/discounts", get(list_discounts))
        .with_state(service)
}

/// List sports
#[utoipa::path(
    get,
    path = "/sports",
    tag = CATALOG_TAG,
    params(SportFilter),
    responses(
        (status = 200, description = "Sports", body = Vec<Sport>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_sports<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(filter): Query<SportFilter>,
) -> BookingResult<Json<Vec<Sport>>> {
    Ok(Json(service.list_sports(filter.active_only).await?))
}

/// List halls
#[utoipa::path(
    get,
    path = "/halls",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Halls", body = Vec<Hall>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_halls<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> BookingResult<Json<Vec<Hall>>> {
    Ok(Json(service.list_halls().await?))
}

/// Fields of one hall
#[utoipa::path(
    get,
    path = "/halls/{id}/fields",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Hall id")),
    responses(
        (status = 200, description = "Fields in the hall", body = Vec<Field>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn list_hall_fields<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> BookingResult<Json<Vec<Field>>> {
    Ok(Json(service.list_fields_by_hall(id).await?))
}

/// Which sport can be played on which field
#[utoipa::path(
    get,
    path = "/sport-fields",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Sport/field pairs", body = Vec<SportField>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_sport_fields<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> BookingResult<Json<Vec<SportField>>> {
    Ok(Json(service.list_sport_fields().await?))
}

/// Closures planned for a sport field
#[utoipa::path(
    get,
    path = "/sport-fields/{id}/closures",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Sport field id")),
    responses(
        (status = 200, description = "Closures", body = Vec<Closure>),
        (status = 400, response = BadRequestIdResponse)
    )
)]
pub(super) async fn list_closures<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> BookingResult<Json<Vec<Closure>>> {
    Ok(Json(service.list_closures_for_sport_field(id).await?))
}

/// List time slots
#[utoipa::path(
    get,
    path = "/time-slots",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Time slots", body = Vec<TimeSlot>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_time_slots<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> BookingResult<Json<Vec<TimeSlot>>> {
    Ok(Json(service.list_time_slots().await?))
}

/// List subscription offers
#[utoipa::path(
    get,
    path = "/subscriptions",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Subscriptions", body = Vec<Subscription>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_subscriptions<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> BookingResult<Json<Vec<Subscription>>> {
    Ok(Json(service.list_subscriptions().await?))
}

/// List discounts
#[utoipa::path(
    get,
    path = "/discounts",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Discounts", body = Vec<Discount>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_discounts<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> BookingResult<Json<Vec<Discount>>> {
    Ok(Json(service.list_discounts().await?))
}
