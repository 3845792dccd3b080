// src/config.rs
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    session_ttl: Duration,
    session_cleanup_interval: Duration,
    secure_cookies: bool,
    static_dir: PathBuf,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_SESSION_CLEANUP_SECS: u64 = 60;

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &'static str) -> bool {
    env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to local
    /// development defaults. Numeric variables that are present but do not
    /// parse are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let database_max_connections =
            parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let session_ttl_secs = parse_var("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECS)?;
        let session_cleanup_secs =
            parse_var("SESSION_CLEANUP_INTERVAL_SECONDS", DEFAULT_SESSION_CLEANUP_SECS)?;
        if session_cleanup_secs == 0 {
            return Err(ConfigError::Invalid(
                "SESSION_CLEANUP_INTERVAL_SECONDS must be at least 1".into(),
            ));
        }

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            session_ttl: Duration::from_secs(session_ttl_secs),
            session_cleanup_interval: Duration::from_secs(session_cleanup_secs),
            secure_cookies: parse_flag("SESSION_SECURE_COOKIE"),
            static_dir,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// How often expired session rows are purged.
    pub fn session_cleanup_interval(&self) -> Duration {
        self.session_cleanup_interval
    }

    /// Whether the session cookie carries the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }

    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
