//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::time::Duration;

use actix_web::cookie::Key;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8787";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub api_base: String,
    pub api_timeout: Duration,
    pub bind_addr: String,
    pub session_key: Key,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset or unparseable values fall back to defaults.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = var("RESULTS_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let api_timeout = match var("RESULTS_API_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Ignoring RESULTS_API_TIMEOUT_SECS={v:?}, using {DEFAULT_TIMEOUT_SECS}");
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let bind_addr = var("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        // Session encryption key; a stable SESSION_KEY keeps admins logged in across restarts
        let session_key = match var("SESSION_KEY") {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        let cookie_secure = match var("COOKIE_SECURE").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") | Some("") | None => false,
            Some(other) => {
                log::warn!("Ignoring COOKIE_SECURE={other:?}, using false");
                false
            }
        };

        Self { api_base, api_timeout, bind_addr, session_key, cookie_secure }
    }
}
