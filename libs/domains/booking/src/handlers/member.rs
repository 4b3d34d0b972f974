use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::{InternalServerErrorResponse, UnauthorizedResponse};
use domain_users::RequestContext;
use std::sync::Arc;

use super::MEMBER_TAG;
use crate::error::BookingResult;
use crate::models::{MemberSubscription, Order, Reservation};
use crate::repository::BookingRepository;
use crate::service::CatalogService;

/// `/me/*` routes; the principal comes from the session, never the path
pub fn member_router<R: BookingRepository + 'static>(service: Arc<CatalogService<R>>) -> Router {
    Router::new()
        .route("/me/reservations", get(my_reservations))
        .route("/me/orders", get(my_orders))
        .route("/me/subscriptions", get(my_subscriptions))
        .with_state(service)
}

/// Reservations of the signed-in member
#[utoipa::path(
    get,
    path = "/me/reservations",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Reservations", body = Vec<Reservation>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn my_reservations<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ctx: RequestContext,
) -> BookingResult<Json<Vec<Reservation>>> {
    let user_id = ctx.require_principal()?.user_id;
    Ok(Json(service.list_reservations_for_user(user_id).await?))
}

/// Orders of the signed-in member
#[utoipa::path(
    get,
    path = "/me/orders",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<Order>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn my_orders<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ctx: RequestContext,
) -> BookingResult<Json<Vec<Order>>> {
    let user_id = ctx.require_principal()?.user_id;
    Ok(Json(service.list_orders_for_user(user_id).await?))
}

/// Subscriptions held by the signed-in member
#[utoipa::path(
    get,
    path = "/me/subscriptions",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Held subscriptions", body = Vec<MemberSubscription>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn my_subscriptions<R: BookingRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ctx: RequestContext,
) -> BookingResult<Json<Vec<MemberSubscription>>> {
    let user_id = ctx.require_principal()?.user_id;
    Ok(Json(service.list_subscriptions_for_user(user_id).await?))
}
