use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub bank_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            port: try_load("RUST_PORT", "3000")?,
            static_dir: try_load("STATIC_DIR", "dist")?,
            bank_url: var("BANK_URL").ok(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: PathBuf::from("dist"),
            bank_url: None,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");

            AppError::Config(key.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_used_for_missing_keys() {
        let port: u16 = try_load("JOKES_TEST_MISSING_PORT", "4321").unwrap();

        assert_eq!(port, 4321);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let err = try_load::<u16>("JOKES_TEST_MISSING_PORT_BAD", "not-a-port").unwrap_err();

        assert!(matches!(err, AppError::Config(key) if key == "JOKES_TEST_MISSING_PORT_BAD"));
    }
}
