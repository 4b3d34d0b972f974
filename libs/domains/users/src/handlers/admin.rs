use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{IdPath, ValidatedJson};
use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestResponse, ConflictResponse, ForbiddenResponse,
    InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
};
use std::sync::Arc;

use super::ADMIN_TAG;
use crate::error::{UserError, UserResult};
use crate::models::{ProfileUpdate, UserResponse, UserSearch, UsersPage};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::session::RequestContext;

/// `/admin/users` management, restricted to the admin role
pub fn admin_router<R: UserRepository + 'static>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/admin/users", get(list_users))
        .route(
            "/admin/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(service)
}

/// Search and page through users
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = ADMIN_TAG,
    params(UserSearch),
    responses(
        (status = 200, description = "One page of users, 10 per page", body = UsersPage),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ctx: RequestContext,
    Query(search): Query<UserSearch>,
) -> UserResult<Json<UsersPage>> {
    ctx.require_admin(&service.policy())?;

    let page = service
        .list_users_page(search.search_query, search.page)
        .await?;
    Ok(Json(page))
}

/// Get one user
#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    ctx.require_admin(&service.policy())?;

    let user = service
        .find_by_id(id)
        .await?
        .ok_or(UserError::UserNotFound(id))?;
    Ok(Json(user.into()))
}

/// Edit any user, including blacklist, active and role
///
/// `blacklist` and `active` are set to `false` when omitted.
#[utoipa::path(
    put,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse)
    )
)]
pub(super) async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    mut ctx: RequestContext,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<ProfileUpdate>,
) -> UserResult<Json<UserResponse>> {
    let admin_id = ctx.require_admin(&service.policy())?.user_id;

    let user = service
        .find_by_id(id)
        .await?
        .ok_or(UserError::UserNotFound(id))?;

    let prepared = service.prepare_update(&user, &update, true).await?;
    let saved = service.update_user(prepared).await?;

    if saved.id == admin_id {
        ctx.refresh_principal(&saved).await?;
    }

    tracing::info!(user_id = id, admin_id, "Admin updated user");
    Ok(Json(saved.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    let admin_id = ctx.require_admin(&service.policy())?.user_id;

    if !service.delete_by_id(id).await? {
        return Err(UserError::UserNotFound(id));
    }

    tracing::info!(user_id = id, admin_id, "Admin deleted user");
    Ok(StatusCode::NO_CONTENT)
}
