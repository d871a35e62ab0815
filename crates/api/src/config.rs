use crate::auth::jwt::JwtConfig;

/// Error raised when the process environment is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} has an invalid value: {1:?}")]
    Invalid(&'static str, String),
}

/// Where documents are persisted.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// PostgreSQL at the given connection URL.
    Postgres { database_url: String },
    /// Process memory; contents are lost on exit.
    Memory,
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list; credentials are allowed.
    List(Vec<String>),
}

/// Server configuration loaded once from environment variables at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Document store backend.
    pub store: StoreBackend,
    /// Token signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `4000`                           |
    /// | `CORS_ORIGINS`         | `*`                              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `STORE_BACKEND`        | `postgres` (or `memory`)         |
    /// | `DATABASE_URL`         | required for `postgres`          |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 4000u16)?;
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30u64)?;

        let cors_origins =
            parse_cors_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let store = match std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .as_str()
        {
            "postgres" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            },
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::Invalid("STORE_BACKEND", other.to_string())),
        };

        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
            jwt,
        })
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Parse `CORS_ORIGINS`. A lone `*` (or an empty list) allows any origin.
pub fn parse_cors_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}
