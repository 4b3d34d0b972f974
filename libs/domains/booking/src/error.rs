use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::DomainErrorBody;
use domain_users::{UserError, messages::message_for};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("hall not found: {0}")]
    HallNotFound(i32),

    /// Session failure raised by the users domain
    #[error(transparent)]
    Users(#[from] UserError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::HallNotFound(_) => "HALL_NOT_FOUND",
            Self::Users(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::HallNotFound(_) => StatusCode::NOT_FOUND,
            Self::Users(e) => e.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Booking domain internal error");
        }

        let code = self.code();
        DomainErrorBody::new(code, message_for(code)).into_response_with(status)
    }
}
