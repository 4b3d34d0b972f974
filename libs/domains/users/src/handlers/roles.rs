use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{IdPath, ValidatedJson};
use axum_helpers::errors::responses::{BadRequestResponse, ForbiddenResponse, NotFoundResponse};
use std::sync::Arc;

use super::ADMIN_TAG;
use crate::error::UserResult;
use crate::models::{Role, RoleInput};
use crate::role_repository::RoleRepository;
use crate::role_service::{RolePolicy, RoleService};
use crate::session::RequestContext;

/// `/admin/roles` CRUD
pub fn role_router<R: RoleRepository + 'static>(
    service: RoleService<R>,
    policy: RolePolicy,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/admin/roles", get(list_roles).post(create_role))
        .route("/admin/roles/{id}", put(update_role).delete(delete_role))
        .layer(Extension(policy))
        .with_state(shared_service)
}

/// List roles
#[utoipa::path(
    get,
    path = "/admin/roles",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<Role>),
        (status = 403, response = ForbiddenResponse)
    )
)]
pub(super) async fn list_roles<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
) -> UserResult<Json<Vec<Role>>> {
    ctx.require_admin(&policy)?;
    Ok(Json(service.find_all_roles().await?))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/admin/roles",
    tag = ADMIN_TAG,
    request_body = RoleInput,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, response = BadRequestResponse),
        (status = 403, response = ForbiddenResponse)
    )
)]
pub(super) async fn create_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<RoleInput>,
) -> UserResult<impl IntoResponse> {
    ctx.require_admin(&policy)?;
    let role = service.create_role(&input.name).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// Rename a role
#[utoipa::path(
    put,
    path = "/admin/roles/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Role id")),
    request_body = RoleInput,
    responses(
        (status = 200, description = "Role renamed", body = Role),
        (status = 400, response = BadRequestResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn update_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<RoleInput>,
) -> UserResult<Json<Role>> {
    ctx.require_admin(&policy)?;
    Ok(Json(service.update_role(id, &input.name).await?))
}

/// Delete a role no user holds
#[utoipa::path(
    delete,
    path = "/admin/roles/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
pub(super) async fn delete_role<R: RoleRepository>(
    State(service): State<Arc<RoleService<R>>>,
    Extension(policy): Extension<RolePolicy>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    ctx.require_admin(&policy)?;
    service.delete_role_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
