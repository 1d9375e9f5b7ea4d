use std::env;
use std::path::Path;

use crate::error::AppError;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const HOST_ENV: &str = "CGIPARAMS_HOST";
pub const PORT_ENV: &str = "CGIPARAMS_PORT";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    sanitize_host(&env::var(HOST_ENV).unwrap_or_default())
}

/// Port from the environment, or [`DEFAULT_PORT`] when unset or blank
pub fn get_port() -> Result<u16, AppError> {
    match env::var(PORT_ENV) {
        Ok(raw) => parse_port(&raw),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

pub fn parse_port(raw: &str) -> Result<u16, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    trimmed
        .parse::<u16>()
        .map_err(|_| AppError::InvalidPort(trimmed.to_string()))
}

pub fn sanitize_host(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}
