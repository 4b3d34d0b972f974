use axum::Router;
use domain_booking::{CatalogService, PgBookingRepository};
use domain_locations::{
    AddressService, CountryService, LocalityService, PgAddressRepository, PgCountryRepository,
    PgLocalityRepository,
};
use domain_users::{PgRoleRepository, PgUserRepository, RoleService, UserService};
use std::sync::Arc;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Every domain router already has its state applied, so the result is a
/// stateless Router.
pub fn routes(state: &crate::state::AppState) -> Router {
    let db = &state.db;
    let policy = state.policy;

    let users = Arc::new(UserService::new(PgUserRepository::new(db.clone()), policy));
    let roles = RoleService::new(PgRoleRepository::new(db.clone()));
    let addresses = AddressService::new(
        PgAddressRepository::new(db.clone()),
        PgLocalityRepository::new(db.clone()),
    );
    let catalog = Arc::new(CatalogService::new(PgBookingRepository::new(db.clone())));

    Router::new()
        .merge(domain_users::handlers::auth_router(users.clone()))
        .merge(domain_users::handlers::account_router(users.clone()))
        .merge(domain_users::handlers::admin_router(users.clone()))
        .merge(domain_users::handlers::role_router(roles, policy))
        .merge(domain_locations::handlers::locality_router(
            LocalityService::new(PgLocalityRepository::new(db.clone())),
        ))
        .merge(domain_locations::handlers::country_router(
            CountryService::new(PgCountryRepository::new(db.clone())),
        ))
        .merge(domain_locations::handlers::address_admin_router(
            addresses.clone(),
            policy,
        ))
        .merge(domain_locations::handlers::profile_address_router(
            users,
            addresses,
            LocalityService::new(PgLocalityRepository::new(db.clone())),
        ))
        .merge(domain_booking::handlers::catalog_router(catalog.clone()))
        .merge(domain_booking::handlers::member_router(catalog))
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
