use derive_more::Display;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    #[display(fmt = "env {} is required", _0)]
    Missing(&'static str),
    #[display(fmt = "env {} must be a positive integer, got {:?}", _0, _1)]
    Invalid(&'static str, String),
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Base URL the browser uses to reach this server.
    pub api_url: String,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or("PORT", &lookup, DEFAULT_PORT)?;
        let pool_size = parse_or("DB_POOL_SIZE", &lookup, DEFAULT_POOL_SIZE)?;
        let api_url =
            lookup("API_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        Ok(Config {
            database_url,
            port,
            api_url,
            pool_size,
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value != T::default() => Ok(value),
            _ => Err(ConfigError::Invalid(key, raw)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("DATABASE_URL"));
        assert_eq!(
            load(&[("DATABASE_URL", "  ")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn defaults_fill_the_rest() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/wishes")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.api_url, "http://localhost:5000");
    }

    #[test]
    fn explicit_values_win() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/wishes"),
            ("PORT", "8080"),
            ("API_URL", "https://wishes.example.com"),
            ("DB_POOL_SIZE", "4"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.api_url, "https://wishes.example.com");
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert_eq!(
            load(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).unwrap_err(),
            ConfigError::Invalid("PORT", "eighty".to_string())
        );
        assert_eq!(
            load(&[("DATABASE_URL", "x"), ("DB_POOL_SIZE", "0")]).unwrap_err(),
            ConfigError::Invalid("DB_POOL_SIZE", "0".to_string())
        );
    }
}
