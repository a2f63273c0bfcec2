use std::env;
use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DATABASE: &str = "DB_NAME";

/// Connection parameters for the target database.
///
/// Values are taken verbatim from the environment. Missing variables become
/// empty strings and surface later as a connection failure, matching the
/// fail-fast contract: no defaults, no pre-validation.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    /// Reads `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` from the
    /// process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// `from_env()` is a thin wrapper around this; tests supply their own
    /// lookup instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup(ENV_HOST).unwrap_or_default(),
            user: lookup(ENV_USER).unwrap_or_default(),
            password: lookup(ENV_PASSWORD).unwrap_or_default(),
            database: lookup(ENV_DATABASE).unwrap_or_default(),
        }
    }

    /// Driver options for a single connection to the configured database.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
