use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::DomainErrorBody;
use thiserror::Error;

use crate::messages::message_for;

/// Business and infrastructure failures of the users domain.
///
/// Each variant has a stable string code (see [`UserError::code`]) that the
/// HTTP layer renders with its user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("invalid email format")]
    InvalidEmailFormat,

    #[error("invalid first name")]
    InvalidFirstName,

    #[error("invalid last name")]
    InvalidLastName,

    #[error("passwords do not match")]
    PasswordsDoNotMatch,

    #[error("password does not meet the strength rule")]
    InvalidPasswordFormat,

    #[error("email already registered")]
    EmailAlreadyExists,

    #[error("emails do not match")]
    EmailsDoNotMatch,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid gender")]
    InvalidGender,

    #[error("invalid birthdate")]
    InvalidBirthdate,

    /// Role id in an update is not an integer
    #[error("invalid role id")]
    InvalidRoleId,

    /// Role name is blank or already taken
    #[error("invalid role")]
    InvalidRole,

    #[error("user is not active")]
    UserNotActive,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not signed in")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error("user not found: {0}")]
    UserNotFound(i32),

    #[error("role not found: {0}")]
    RoleNotFound(i32),

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::InvalidFirstName => "INVALID_FIRST_NAME",
            Self::InvalidLastName => "INVALID_LAST_NAME",
            Self::PasswordsDoNotMatch => "PASSWORDS_DO_NOT_MATCH",
            Self::InvalidPasswordFormat => "INVALID_PASSWORD_FORMAT",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::EmailsDoNotMatch => "EMAILS_DO_NOT_MATCH",
            Self::InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
            Self::InvalidGender => "INVALID_GENDER",
            Self::InvalidBirthdate => "INVALID_BIRTHDATE",
            Self::InvalidRoleId => "INVALID_ROLE_ID",
            Self::InvalidRole => "INVALID_ROLE",
            Self::UserNotActive => "USER_NOT_ACTIVE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::RoleNotFound(_) => "ROLE_NOT_FOUND",
            Self::PasswordHash(_) | Self::Session(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::UserNotActive | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound(_) | Self::RoleNotFound(_) => StatusCode::NOT_FOUND,
            Self::PasswordHash(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Users domain internal error");
        }

        let code = self.code();
        DomainErrorBody::new(code, message_for(code)).into_response_with(status)
    }
}
