use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:8080",
    "http://127.0.0.1:3000",
    "http://localhost:3000",
];

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidOrigin(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBindAddr(addr) => write!(f, "BIND_ADDR is not a socket address: {}", addr),
            Self::InvalidOrigin(origin) => write!(f, "ALLOWED_ORIGINS has an invalid entry: {}", origin),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means the built-in sample question is served from memory.
    pub database_url: Option<String>,
    /// Shared HS256 secret of the auth service; the stats route is disabled without it.
    pub jwt_secret: Option<String>,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<HeaderValue>,
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn find_static_dir() -> PathBuf {
    ["static", "backend/static", "../backend/static"]
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .unwrap_or_else(|| Path::new("static"))
        .to_path_buf()
}

pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            // Credentialed CORS needs explicit origins.
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin.to_string()));
            }
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let static_dir = non_empty("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(find_static_dir);
        info!("serving frontend from {}", static_dir.display());

        let allowed_origins = match non_empty("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => parse_origins(&DEFAULT_ORIGINS.join(","))?,
        };

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            jwt_secret: non_empty("JWT_SECRET_KEY"),
            bind_addr,
            static_dir,
            allowed_origins,
        })
    }
}
