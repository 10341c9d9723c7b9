use std::{env, fmt::Display};
use actix_web::cookie::Key;
use sha256::digest;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Server settings read from the environment (and `.env`, loaded in `main`).
///
/// - `DATABASE_URL`: Postgres connection string, the in-memory store is used when unset
/// - `BIND_ADDRESS` / `PORT`: where the server listens
/// - `SECRET_KEY`: secret used to sign session cookies
/// - `DATABASE_POOL_SIZE`: maximum number of pooled connections
/// - `SECURE_COOKIES`: only send the session cookie over https
#[derive(Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub bind_address: String,
    pub port: u16,
    pub session_key: Key,
    pub pool_size: u32,
    pub secure_cookies: bool,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Invalid { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { name, value } => {
                write!(f, "Enviroment variable '{}' has an invalid value: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let pool_size = parse_or("DATABASE_POOL_SIZE", lookup("DATABASE_POOL_SIZE"), DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid { name: "DATABASE_POOL_SIZE", value: "0".to_string() });
        }
        let secure_cookies = parse_or("SECURE_COOKIES", lookup("SECURE_COOKIES"), false)?;

        let session_key = match lookup("SECRET_KEY") {
            Some(secret) if !secret.is_empty() => session_key_from_secret(&secret),
            _ => {
                log::warn!("SECRET_KEY not set, sessions will not survive a restart");
                Key::generate()
            }
        };

        Ok(Config {
            database_url,
            bind_address,
            port,
            session_key,
            pool_size,
            secure_cookies,
        })
    }
}

/// Stretches a secret of any length into the 64 bytes the cookie key needs.
/// The hex form of a sha256 digest is exactly 64 characters long.
pub fn session_key_from_secret(secret: &str) -> Key {
    Key::from(digest(secret.to_string()).as_bytes())
}

fn parse_or<T: std::str::FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
