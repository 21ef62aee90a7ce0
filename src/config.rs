use crate::error::ConfigError;
use actix_web::cookie::Key;
use chrono::Duration;
use std::{env, fs::read_to_string};
use tracing::{info, warn};

const DEV_SESSION_KEY: &str = "foodshare-development-session-key-change-me-before-deploying";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_path: String,
    pub admin_password: String,
    pub session_key: String,
    pub session_ttl: Duration,
    pub static_dir: String,
}

impl Config {
    /// Reads settings from the environment, falling back to
    /// `/run/secrets/<NAME>` files and then to development defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok().or_else(|| read_secret(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = lookup("FOODSHARE_ADMIN_PASSWORD").unwrap_or_else(|| {
            warn!("FOODSHARE_ADMIN_PASSWORD not set, using the development password");
            "admin123".to_string()
        });

        let session_key = lookup("FOODSHARE_SESSION_KEY").unwrap_or_else(|| {
            warn!("FOODSHARE_SESSION_KEY not set, sessions are signed with a development key");
            DEV_SESSION_KEY.to_string()
        });
        if session_key.len() < 32 {
            return Err(ConfigError::SessionKeyTooShort(session_key.len()));
        }

        let ttl_secs: i64 = parse_or(&lookup, "FOODSHARE_SESSION_TTL_SECS", "86400")?;
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "FOODSHARE_SESSION_TTL_SECS",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            bind_addr: or_default(&lookup, "FOODSHARE_BIND_ADDR", "127.0.0.1:5000"),
            database_path: or_default(&lookup, "FOODSHARE_DATABASE", "foodshare.db"),
            admin_password,
            session_key,
            session_ttl: Duration::seconds(ttl_secs),
            static_dir: or_default(&lookup, "FOODSHARE_STATIC_DIR", "static"),
        })
    }

    pub fn cookie_key(&self) -> Key {
        Key::derive_from(self.session_key.as_bytes())
    }
}

fn or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<F>(lookup: &F, key: &'static str, default: &str) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    or_default(lookup, key, default)
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}

fn read_secret(name: &str) -> Option<String> {
    let path = format!("/run/secrets/{name}");
    read_to_string(&path).ok().map(|s| s.trim().to_string())
}
