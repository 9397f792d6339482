use std::env;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Clone)]
pub struct Config {
    app_addr: String,
    database_url: String,
    access_secret: String,
    refresh_secret: String,
    admin_secret: String,
    api_key_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl Config {
    pub fn app_addr(&self) -> &str {
        &self.app_addr
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn access_secret(&self) -> &str {
        &self.access_secret
    }
    pub fn refresh_secret(&self) -> &str {
        &self.refresh_secret
    }
    pub fn admin_secret(&self) -> &str {
        &self.admin_secret
    }
    pub fn api_key_secret(&self) -> &str {
        &self.api_key_secret
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let app_addr = opt_var("APP_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into());
        let database_url = req_var("DATABASE_URL")?;

        let access_secret = secret_var("ACCESS_SECRET")?;
        let refresh_secret = secret_var("REFRESH_SECRET")?;
        let admin_secret = secret_var("ADMIN_SECRET")?;
        let api_key_secret = secret_var("API_KEY_SECRET")?;

        let access_ttl_seconds = parse_i64("ACCESS_TTL_SECONDS")?;
        let refresh_ttl_seconds = parse_i64("REFRESH_TTL_SECONDS")?;

        Ok(Self {
            app_addr,
            database_url,
            access_secret,
            refresh_secret,
            admin_secret,
            api_key_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("{0} must be at least 32 bytes")]
    WeakSecret(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

fn secret_var(key: &'static str) -> Result<String, ConfigError> {
    let v = req_var(key)?;
    // HS256 wants >= 32 bytes of key material
    if v.len() < 32 {
        return Err(ConfigError::WeakSecret(key));
    }
    Ok(v)
}
