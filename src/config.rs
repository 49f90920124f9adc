/*
 * Responsibility
 * - Load settings from the environment (bind address, accepted credential, app env, HTTP limits)
 * - Validate them (startup fails on bad values)
 */
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderName;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 6868;
pub const DEFAULT_API_TOKEN: &str = "token test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Transport limits applied to every request by `middleware::http`.
#[derive(Clone, Debug)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
    pub request_id_header: HeaderName,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
            request_id_header: HeaderName::from_static("x-request-id"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    // Authorization header value accepted verbatim
    pub api_token: String,
    pub http: HttpLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip: IpAddr = var("HOST")
            .as_deref()
            .unwrap_or("0.0.0.0")
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let port: u16 = parse_or(var("PORT"), DEFAULT_PORT, "PORT")?;

        let api_token = var("HUB_API_TOKEN").unwrap_or_else(|| DEFAULT_API_TOKEN.to_string());
        if api_token.is_empty() {
            return Err(ConfigError::Invalid("HUB_API_TOKEN"));
        }

        let app_env = var("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let defaults = HttpLimits::default();

        let timeout_secs: u64 = parse_or(
            var("REQUEST_TIMEOUT_SECONDS"),
            defaults.request_timeout.as_secs(),
            "REQUEST_TIMEOUT_SECONDS",
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        let body_limit_bytes: usize = parse_or(
            var("BODY_LIMIT_BYTES"),
            defaults.body_limit_bytes,
            "BODY_LIMIT_BYTES",
        )?;

        let request_id_header = match var("REQUEST_ID_HEADER") {
            Some(name) => HeaderName::try_from(name.to_ascii_lowercase())
                .map_err(|_| ConfigError::Invalid("REQUEST_ID_HEADER"))?,
            None => defaults.request_id_header,
        };

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            app_env,
            api_token,
            http: HttpLimits {
                request_timeout: Duration::from_secs(timeout_secs),
                body_limit_bytes,
                request_id_header,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    default: T,
    key: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_fixture_port() {
        let config = load(&[]).unwrap();

        assert_eq!(config.addr, "0.0.0.0:6868".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_token, "token test");
        assert!(!config.app_env.is_production());
        assert_eq!(config.http.request_timeout, Duration::from_secs(30));
        assert_eq!(config.http.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.http.request_id_header, "x-request-id");
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("HUB_API_TOKEN", "token other"),
            ("APP_ENV", "prod"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("BODY_LIMIT_BYTES", "4096"),
            ("REQUEST_ID_HEADER", "X-Trace-Id"),
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_token, "token other");
        assert!(config.app_env.is_production());
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.http.body_limit_bytes, 4096);
        assert_eq!(config.http.request_id_header, "x-trace-id");
    }

    #[test]
    fn rejects_bad_values() {
        for (key, value) in [
            ("PORT", "not-a-port"),
            ("HOST", "hub.local"),
            ("HUB_API_TOKEN", ""),
            ("REQUEST_TIMEOUT_SECONDS", "0"),
            ("REQUEST_TIMEOUT_SECONDS", "soon"),
            ("BODY_LIMIT_BYTES", "-1"),
            ("REQUEST_ID_HEADER", "bad header"),
        ] {
            let err = load(&[(key, value)]).unwrap_err();
            assert_eq!(err, ConfigError::Invalid(key), "{key}={value:?}");
        }
    }

    #[test]
    fn app_env_parsing() {
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
