//! Server configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::search::SearchOptions;

/// Store connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    /// Maximum live connections; requests beyond this wait for a free one
    pub connection_limit: usize,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("connection_limit", &self.connection_limit)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: None,
            database: "physicians".into(),
            connection_limit: 10,
        }
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    /// Upper bound on any single statement, including time spent queued for a connection
    pub query_timeout: Duration,
    /// Run the diagnostic probes when a search matches nothing
    pub diagnostics: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `.env.local` and then `.env` are read first if present; variables already
    /// set in the environment win. Unparsable numbers fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();

        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                host: std::env::var("DB_HOST").unwrap_or(defaults.host),
                port: env_parse("DB_PORT", defaults.port),
                user: std::env::var("DB_USER").unwrap_or(defaults.user),
                password: std::env::var("DB_PASSWORD").ok(),
                database: std::env::var("DB_NAME").unwrap_or(defaults.database),
                connection_limit: env_parse("DB_CONNECTION_LIMIT", defaults.connection_limit)
                    .max(1),
            },
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            query_timeout: Duration::from_secs(env_parse("QUERY_TIMEOUT_SECS", 30u64).max(1)),
            diagnostics: env_parse("SEARCH_DIAGNOSTICS", true),
        }
    }

    /// Search engine settings derived from this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            query_timeout: self.query_timeout,
            diagnostics: self.diagnostics,
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
