//! Per-request view of the cookie session.
//!
//! Handlers never touch raw session keys: they take a [`RequestContext`],
//! which exposes the signed-in [`Principal`] and one-shot [`Notice`]s.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::role_service::RolePolicy;

const PRINCIPAL_KEY: &str = "principal";
const NOTICES_KEY: &str = "notices";

/// The signed-in user as remembered by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role_id: user.role_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
}

/// Message shown once on the next page the user opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

fn session_error(e: tower_sessions::session::Error) -> UserError {
    UserError::Session(e.to_string())
}

pub struct RequestContext {
    session: Session,
    principal: Option<Principal>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| UserError::Session(msg.to_string()))?;

        Self::load(session).await
    }
}

impl RequestContext {
    pub async fn load(session: Session) -> UserResult<Self> {
        let principal = session
            .get::<Principal>(PRINCIPAL_KEY)
            .await
            .map_err(session_error)?;

        Ok(Self { session, principal })
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn require_principal(&self) -> UserResult<&Principal> {
        self.principal.as_ref().ok_or(UserError::Unauthenticated)
    }

    /// `Unauthenticated` without a session, `Forbidden` for non-admins.
    pub fn require_admin(&self, policy: &RolePolicy) -> UserResult<&Principal> {
        let principal = self.require_principal()?;
        if !policy.is_admin(principal.role_id) {
            tracing::warn!(user_id = principal.user_id, "Non-admin on admin route");
            return Err(UserError::Forbidden);
        }
        Ok(principal)
    }

    /// Issues a new session id and stores the principal under it.
    pub async fn sign_in(&mut self, user: &User) -> UserResult<()> {
        self.session.cycle_id().await.map_err(session_error)?;
        self.refresh_principal(user).await?;

        tracing::info!(user_id = user.id, "Signed in");
        Ok(())
    }

    /// Replaces the stored principal after the user's profile changed.
    pub async fn refresh_principal(&mut self, user: &User) -> UserResult<()> {
        let principal = Principal::from(user);
        self.session
            .insert(PRINCIPAL_KEY, &principal)
            .await
            .map_err(session_error)?;

        self.principal = Some(principal);
        Ok(())
    }

    /// Drops the whole session, notices included.
    pub async fn sign_out(&mut self) -> UserResult<()> {
        if let Some(principal) = self.principal.take() {
            tracing::info!(user_id = principal.user_id, "Signed out");
        }
        self.session.flush().await.map_err(session_error)
    }

    pub async fn push_notice(&self, notice: Notice) -> UserResult<()> {
        let mut notices = self
            .session
            .get::<Vec<Notice>>(NOTICES_KEY)
            .await
            .map_err(session_error)?
            .unwrap_or_default();
        notices.push(notice);

        self.session
            .insert(NOTICES_KEY, notices)
            .await
            .map_err(session_error)
    }

    /// Returns pending notices and clears them.
    pub async fn take_notices(&self) -> UserResult<Vec<Notice>> {
        let notices = self
            .session
            .remove::<Vec<Notice>>(NOTICES_KEY)
            .await
            .map_err(session_error)?;

        Ok(notices.unwrap_or_default())
    }
}
