use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::DomainErrorBody;
use domain_users::{UserError, messages::message_for};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Locality id is missing or unknown
    #[error("invalid locality")]
    InvalidLocality,

    /// Street, number or box number fails the length rules
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("address not found: {0}")]
    AddressNotFound(i32),

    #[error("country not found: {0}")]
    CountryNotFound(i32),

    #[error("locality not found: {0}")]
    LocalityNotFound(i32),

    /// Session or authorization failure raised by the users domain
    #[error(transparent)]
    Users(#[from] UserError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type LocationResult<T> = Result<T, LocationError>;

impl LocationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLocality => "INVALID_LOCALITY",
            Self::InvalidAddress(_) => "INVALID_ADDRESS",
            Self::AddressNotFound(_) => "ADDRESS_NOT_FOUND",
            Self::CountryNotFound(_) => "COUNTRY_NOT_FOUND",
            Self::LocalityNotFound(_) => "NOT_FOUND",
            Self::Users(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidLocality | Self::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            Self::AddressNotFound(_) | Self::CountryNotFound(_) | Self::LocalityNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Users(e) => e.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LocationError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Locations domain internal error");
        } else if let Self::InvalidAddress(reason) = &self {
            tracing::debug!(reason = %reason, "Rejected address");
        }

        let code = self.code();
        DomainErrorBody::new(code, message_for(code)).into_response_with(status)
    }
}
