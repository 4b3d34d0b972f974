use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig,
    session::SessionConfig,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Names of the roles the API treats specially, resolved to ids at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleNames {
    pub member: String,
    pub admin: String,
}

impl FromEnv for RoleNames {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            member: env_or_default("MEMBER_ROLE_NAME", "member"),
            admin: env_or_default("ADMIN_ROLE_NAME", "admin"),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub roles: RoleNames,
    pub run_migrations: bool,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let session = SessionConfig::from_env()?;
        let roles = RoleNames::from_env()?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            session,
            roles,
            run_migrations,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/sportcenter")),
                ("APP_ENV", None),
                ("RUN_MIGRATIONS", None),
                ("MEMBER_ROLE_NAME", None),
                ("ADMIN_ROLE_NAME", None),
                ("SESSION_SECURE_COOKIE", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.run_migrations);
                assert_eq!(config.roles.member, "member");
                assert_eq!(config.roles.admin, "admin");
                assert!(!config.session.secure_cookie);
                assert_eq!(config.app.name, "sportcenter_api");
            },
        );
    }

    #[test]
    fn test_production_and_overrides() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/sportcenter")),
                ("APP_ENV", Some("production")),
                ("RUN_MIGRATIONS", Some("false")),
                ("ADMIN_ROLE_NAME", Some("manager")),
                ("SESSION_SECURE_COOKIE", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert!(!config.run_migrations);
                assert_eq!(config.roles.admin, "manager");
                assert!(config.session.secure_cookie);
            },
        );
    }

    #[test]
    fn test_missing_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_invalid_run_migrations_flag() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/sportcenter")),
                ("RUN_MIGRATIONS", Some("sometimes")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("RUN_MIGRATIONS"));
            },
        );
    }
}
