use crate::{env_or_default, env_parse, ConfigError, Environment, FromEnv};

/// Cookie session settings
///
/// Environment variables:
/// - `SESSION_COOKIE_NAME` (default: `sportcenter.sid`)
/// - `SESSION_INACTIVITY_MINUTES` (default: 30)
/// - `SESSION_SECURE_COOKIE` (default: true when `APP_ENV=production`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub inactivity_minutes: i64,
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            secure_cookie: environment.use_https(),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "sportcenter.sid".to_string(),
            inactivity_minutes: 30,
            secure_cookie: false,
        }
    }
}

impl FromEnv for SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(Environment::from_env());

        let cookie_name = env_or_default("SESSION_COOKIE_NAME", &defaults.cookie_name);
        let inactivity_minutes: i64 = env_parse(
            "SESSION_INACTIVITY_MINUTES",
            &defaults.inactivity_minutes.to_string(),
        )?;
        if inactivity_minutes <= 0 {
            return Err(ConfigError::ParseError {
                key: "SESSION_INACTIVITY_MINUTES".to_string(),
                details: "must be a positive number of minutes".to_string(),
            });
        }
        let secure_cookie = env_parse(
            "SESSION_SECURE_COOKIE",
            &defaults.secure_cookie.to_string(),
        )?;

        Ok(Self {
            cookie_name,
            inactivity_minutes,
            secure_cookie,
        })
    }
}
