//! Runtime settings read from the environment.
//!
//! Every value is parsed and checked once at startup, so the router and the
//! logging setup receive ready-to-use types (socket address, header values,
//! durations, a tracing level) and never have to fail later.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tracing::Level;

/// A setting that is missing or cannot be parsed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where and how much the service logs.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the daily-rotated error log.
    pub dir: PathBuf,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Level of the per-request span and response events.
    pub request_level: Level,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Allowed CORS origins, already validated as header values.
    pub cors_origins: Vec<HeaderValue>,
    /// Largest accepted request body. A week of timesheet entries is a few
    /// hundred bytes.
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
    /// Upper bound on draining the pool after a shutdown signal.
    pub shutdown_timeout: Duration,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                                 |
    /// |-------------------------|-----------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                               |
    /// | `PORT`                  | `3000`                                  |
    /// | `DATABASE_URL`          | required                                |
    /// | `DB_MAX_CONNECTIONS`    | `20`                                    |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                 |
    /// | `MAX_BODY_BYTES`        | `65536`                                 |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                    |
    /// | `LOG_DIR`               | `logs`                                  |
    /// | `LOG_FILTER`            | `timesheet_api=debug,tower_http=debug`  |
    /// | `LOG_REQUEST_LEVEL`     | `info`                                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = parsed(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parsed(&lookup, "PORT", 3000)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log = LogConfig {
            dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            filter: lookup("LOG_FILTER")
                .unwrap_or_else(|| "timesheet_api=debug,tower_http=debug".into()),
            request_level: parsed(&lookup, "LOG_REQUEST_LEVEL", Level::INFO)?,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            database_url,
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 20)?,
            cors_origins,
            max_body_bytes: parsed(&lookup, "MAX_BODY_BYTES", 64 * 1024)?,
            request_timeout: Duration::from_secs(parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            shutdown_timeout: Duration::from_secs(parsed(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30)?),
            log,
        })
    }
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
