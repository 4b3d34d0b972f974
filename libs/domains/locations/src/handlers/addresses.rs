use axum::{
    Extension, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::IdPath;
use axum_helpers::errors::responses::{
    BadRequestIdResponse, ForbiddenResponse, NotFoundResponse, UnauthorizedResponse,
};
use domain_users::{RequestContext, RolePolicy};
use std::sync::Arc;

use super::LOCATIONS_TAG;
use crate::error::{LocationError, LocationResult};
use crate::models::{Address, AddressSearch};
use crate::repository::{AddressRepository, LocalityRepository};
use crate::service::AddressService;

/// `/admin/addresses` lookups, restricted to the admin role
pub fn address_admin_router<A, L>(service: AddressService<A, L>, policy: RolePolicy) -> Router
where
    A: AddressRepository + 'static,
    L: LocalityRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/admin/addresses", get(search_addresses))
        .route(
            "/admin/addresses/{id}",
            get(get_address).delete(delete_address),
        )
        .layer(Extension(policy))
        .with_state(shared_service)
}

/// Find addresses by exact street name and/or locality
#[utoipa::path(
    get,
    path = "/admin/addresses",
    tag = LOCATIONS_TAG,
    params(AddressSearch),
    responses(
        (status = 200, description = "Matching addresses", body = Vec<Address>),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse)
    )
)]
pub(super) async fn search_addresses<A: AddressRepository, L: LocalityRepository>(
    State(service): State<Arc<AddressService<A, L>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    Query(search): Query<AddressSearch>,
) -> LocationResult<Json<Vec<Address>>> {
    ctx.require_admin(&policy)?;
    Ok(Json(service.search(&search).await?))
}

/// Get one address
#[utoipa::path(
    get,
    path = "/admin/addresses/{id}",
    tag = LOCATIONS_TAG,
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address", body = Address),
        (status = 400, response = BadRequestIdResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn get_address<A: AddressRepository, L: LocalityRepository>(
    State(service): State<Arc<AddressService<A, L>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> LocationResult<Json<Address>> {
    ctx.require_admin(&policy)?;
    service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(LocationError::AddressNotFound(id))
}

/// Delete an address; users pointing at it lose their address
#[utoipa::path(
    delete,
    path = "/admin/addresses/{id}",
    tag = LOCATIONS_TAG,
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn delete_address<A: AddressRepository, L: LocalityRepository>(
    State(service): State<Arc<AddressService<A, L>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> LocationResult<StatusCode> {
    ctx.require_admin(&policy)?;
    service.delete_address_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
