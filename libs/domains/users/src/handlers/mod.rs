mod account;
mod admin;
mod auth;
mod roles;

use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;

use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestResponse, BadRequestValidationResponse, ConflictResponse,
    ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
};

use crate::models::{
    Gender, LoginRequest, ProfileUpdate, RegisterRequest, Role, RoleInput, UserResponse, UsersPage,
};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::session::{Notice, NoticeKind, Principal};

pub use account::{DashboardResponse, account_router, current_user};
pub use admin::admin_router;
pub use auth::auth_router;
pub use roles::role_router;

pub const AUTH_TAG: &str = "auth";
pub const ACCOUNT_TAG: &str = "account";
pub const ADMIN_TAG: &str = "admin";

/// OpenAPI documentation for the users domain
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        account::dashboard,
        account::get_profile,
        account::update_profile,
        admin::list_users,
        admin::get_user,
        admin::update_user,
        admin::delete_user,
        roles::list_roles,
        roles::create_role,
        roles::update_role,
        roles::delete_role,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            ProfileUpdate,
            UserResponse,
            UsersPage,
            Gender,
            Role,
            RoleInput,
            Principal,
            Notice,
            NoticeKind,
            DashboardResponse,
        ),
        responses(
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Registration and sign-in"),
        (name = ACCOUNT_TAG, description = "Signed-in member's own account"),
        (name = ADMIN_TAG, description = "User and role administration")
    )
)]
pub struct ApiDoc;

/// Auth, account and admin user routes sharing one service.
///
/// Role administration is mounted separately with [`role_router`].
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .merge(auth_router(shared_service.clone()))
        .merge(account_router(shared_service.clone()))
        .merge(admin_router(shared_service))
}
