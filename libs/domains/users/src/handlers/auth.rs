use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_helpers::ValidatedJson;
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, ForbiddenResponse, InternalServerErrorResponse,
    UnauthorizedResponse,
};
use std::sync::Arc;

use super::AUTH_TAG;
use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, RegisterRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::session::{Notice, RequestContext};

/// `/auth/register`, `/auth/login` and `/auth/logout`
pub fn auth_router<R: UserRepository + 'static>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .with_state(service)
}

/// Register a new member account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let (new_user, confirm_password) = input.into_parts();
    let user = service.create_user(new_user, &confirm_password).await?;

    ctx.push_notice(Notice::success(
        "Registration successful. You can now sign in.",
    ))
    .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; the session cookie now carries the principal", body = UserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    mut ctx: RequestContext,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<UserResponse>> {
    let user = service
        .authenticate(&input.email, &input.password)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

    ctx.sign_in(&user).await?;
    Ok(Json(user.into()))
}

/// Sign out and drop the session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(super) async fn logout(mut ctx: RequestContext) -> UserResult<StatusCode> {
    ctx.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}
