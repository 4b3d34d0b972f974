use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::ValidatedJson;
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse,
};
use domain_users::handlers::current_user;
use domain_users::{Notice, RequestContext, UserRepository, UserService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::LOCATIONS_TAG;
use crate::error::LocationResult;
use crate::models::{Address, AddressInput, Locality};
use crate::repository::{AddressRepository, LocalityRepository};
use crate::service::{AddressService, LocalityService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileAddressResponse {
    pub address: Option<Address>,
    /// Choices for the locality picker
    pub localities: Vec<Locality>,
}

pub(super) struct ProfileAddressState<U: UserRepository, A: AddressRepository, L: LocalityRepository> {
    users: Arc<UserService<U>>,
    addresses: AddressService<A, L>,
    localities: LocalityService<L>,
}

/// `/profile/address` for the signed-in member
pub fn profile_address_router<U, A, L>(
    users: Arc<UserService<U>>,
    addresses: AddressService<A, L>,
    localities: LocalityService<L>,
) -> Router
where
    U: UserRepository + 'static,
    A: AddressRepository + 'static,
    L: LocalityRepository + 'static,
{
    let state = Arc::new(ProfileAddressState {
        users,
        addresses,
        localities,
    });

    Router::new()
        .route(
            "/profile/address",
            get(get_profile_address).put(put_profile_address),
        )
        .with_state(state)
}

/// Current address and the localities to choose from
#[utoipa::path(
    get,
    path = "/profile/address",
    tag = LOCATIONS_TAG,
    responses(
        (status = 200, description = "Address form data", body = ProfileAddressResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn get_profile_address<U, A, L>(
    State(state): State<Arc<ProfileAddressState<U, A, L>>>,
    mut ctx: RequestContext,
) -> LocationResult<Json<ProfileAddressResponse>>
where
    U: UserRepository,
    A: AddressRepository,
    L: LocalityRepository,
{
    let user = current_user(&state.users, &mut ctx).await?;

    let address = match user.address_id {
        Some(id) => state.addresses.find_by_id(id).await?,
        None => None,
    };
    let localities = state.localities.find_all().await?;

    Ok(Json(ProfileAddressResponse {
        address,
        localities,
    }))
}

/// Save the member's address
///
/// Updates the linked address in place, or creates one and links it.
#[utoipa::path(
    put,
    path = "/profile/address",
    tag = LOCATIONS_TAG,
    request_body = AddressInput,
    responses(
        (status = 200, description = "Address saved", body = Address),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn put_profile_address<U, A, L>(
    State(state): State<Arc<ProfileAddressState<U, A, L>>>,
    mut ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<AddressInput>,
) -> LocationResult<Json<Address>>
where
    U: UserRepository,
    A: AddressRepository,
    L: LocalityRepository,
{
    let user = current_user(&state.users, &mut ctx).await?;

    let linked = match user.address_id {
        Some(id) => state.addresses.find_by_id(id).await?,
        None => None,
    };

    let address = match linked {
        Some(existing) => state.addresses.update_address(existing.id, input).await?,
        None => state.addresses.create_address_for_user(user.id, input).await?,
    };

    ctx.push_notice(Notice::success("Your address has been saved."))
        .await?;

    Ok(Json(address))
}
