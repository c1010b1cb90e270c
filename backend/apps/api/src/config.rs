//! Server configuration loaded from the environment (and `.env`).

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but cannot be parsed
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event, for log shippers
    Json,
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `API_HOST`, default `0.0.0.0`
    pub host: IpAddr,
    /// `API_PORT`, default 8080
    pub port: u16,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<HeaderValue>,
    /// `STATIC_DIR`: built frontend bundle to serve next to the API
    pub static_dir: Option<PathBuf>,
    /// `LOG_FORMAT`: `text` (default) or `json`
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("API_HOST") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "API_HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("API_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "API_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        )?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "LOG_FORMAT",
                        value,
                    });
                }
            },
            None => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            frontend_origins,
            static_dir,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Comma-separated list of exact origins.
///
/// `CorsLayer` refuses a wildcard inside an origin list, so `*` is rejected
/// here along with anything that is not a valid header value.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(invalid_origins(raw));
            }
            origin.parse().map_err(|_| invalid_origins(raw))
        })
        .collect()
}

fn invalid_origins(raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: "FRONTEND_ORIGINS",
        value: raw.to_string(),
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        // an empty lookup only yields built-in defaults, which always parse
        Self::from_lookup(|_| None).unwrap_or(Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            frontend_origins: Vec::new(),
            static_dir: None,
            log_format: LogFormat::Text,
        })
    }
}
