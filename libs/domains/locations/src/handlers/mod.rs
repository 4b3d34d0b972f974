mod addresses;
mod countries;
mod localities;
mod profile;

use utoipa::OpenApi;

use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse,
    NotFoundResponse, UnauthorizedResponse,
};

use crate::models::{Address, AddressInput, Country, Locality, LocalitySummary};

pub use addresses::address_admin_router;
pub use countries::country_router;
pub use localities::locality_router;
pub use profile::{ProfileAddressResponse, profile_address_router};

pub const LOCATIONS_TAG: &str = "locations";

/// OpenAPI documentation for the locations domain
#[derive(OpenApi)]
#[openapi(
    paths(
        localities::list_localities,
        localities::get_locality,
        countries::list_countries,
        countries::get_country,
        addresses::search_addresses,
        addresses::get_address,
        addresses::delete_address,
        profile::get_profile_address,
        profile::put_profile_address,
    ),
    components(
        schemas(
            Address,
            AddressInput,
            Country,
            Locality,
            LocalitySummary,
            ProfileAddressResponse,
        ),
        responses(
            BadRequestResponse,
            BadRequestIdResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            NotFoundResponse,
            InternalServerErrorResponse,
        )
    ),
    tags(
        (name = LOCATIONS_TAG, description = "Countries, localities and addresses")
    )
)]
pub struct ApiDoc;
