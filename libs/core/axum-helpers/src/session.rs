//! Cookie-backed session layer.
//!
//! Sessions live in an in-process [`MemoryStore`]; the cookie only carries the
//! session id. The store is lost on restart, which signs every user out.

use core_config::session::SessionConfig;
use tower_sessions::cookie::{SameSite, time::Duration};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Builds the session layer from configuration.
///
/// ```ignore
/// let app = Router::new()
///     .merge(api_routes)
///     .layer(create_session_layer(&config.session));
/// ```
pub fn create_session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    tracing::debug!(
        cookie = %config.cookie_name,
        inactivity_minutes = config.inactivity_minutes,
        secure = config.secure_cookie,
        "Configuring session layer"
    );

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure_cookie)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.inactivity_minutes,
        )))
}
