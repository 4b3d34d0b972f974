use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::ValidatedJson;
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, UnauthorizedResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::ACCOUNT_TAG;
use crate::error::{UserError, UserResult};
use crate::models::{ProfileUpdate, User, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::session::{Notice, Principal, RequestContext};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub principal: Principal,
    /// Pending notices; they are cleared by this request
    pub notices: Vec<Notice>,
}

/// `/dashboard` and `/profile` for the signed-in member
pub fn account_router<R: UserRepository + 'static>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/profile", get(get_profile).put(update_profile))
        .with_state(service)
}

/// Loads the principal's current row. A session that outlived its account is
/// ended.
pub async fn current_user<R: UserRepository>(
    service: &UserService<R>,
    ctx: &mut RequestContext,
) -> UserResult<User> {
    let user_id = ctx.require_principal()?.user_id;

    match service.find_by_id(user_id).await? {
        Some(user) => Ok(user),
        None => {
            tracing::info!(user_id, "Session refers to a deleted user");
            ctx.sign_out().await?;
            Err(UserError::Unauthenticated)
        }
    }
}

/// Signed-in principal and one-shot notices
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse),
        (status = 401, response = UnauthorizedResponse)
    )
)]
pub(super) async fn dashboard(ctx: RequestContext) -> UserResult<Json<DashboardResponse>> {
    let principal = ctx.require_principal()?.clone();
    let notices = ctx.take_notices().await?;

    Ok(Json(DashboardResponse { principal, notices }))
}

/// Current member's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Profile", body = UserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn get_profile<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    mut ctx: RequestContext,
) -> UserResult<Json<UserResponse>> {
    let user = current_user(&service, &mut ctx).await?;
    Ok(Json(user.into()))
}

/// Edit the current member's profile
///
/// Blank fields are left unchanged. Admin-only fields in the body are ignored.
#[utoipa::path(
    put,
    path = "/profile",
    tag = ACCOUNT_TAG,
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn update_profile<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    mut ctx: RequestContext,
    ValidatedJson(update): ValidatedJson<ProfileUpdate>,
) -> UserResult<Json<UserResponse>> {
    let user = current_user(&service, &mut ctx).await?;

    let prepared = service.prepare_update(&user, &update, false).await?;
    let saved = service.update_user(prepared).await?;

    ctx.refresh_principal(&saved).await?;
    ctx.push_notice(Notice::success("Your profile has been updated."))
        .await?;

    Ok(Json(saved.into()))
}
