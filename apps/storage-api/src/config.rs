use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use storage_lib::WriteTarget;

use crate::constants::{
    DATA_PATH, DEFAULT_DATA_PATH, DEFAULT_PORT, ENV, LOCAL_ENV, REQUEST_TIMEOUT_SECS,
    SHUTDOWN_TIMEOUT_SECS, STORAGE_API_PORT,
};

/// A setting that was present but could not be parsed; the default was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSetting {
    pub env_var: &'static str,
    pub value: String,
}

/// Parse `key` from the lookup, falling back to `default` when unset or invalid.
fn parse_or<T, F>(lookup: &F, key: &'static str, default: T, invalid: &mut Vec<InvalidSetting>) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            invalid.push(InvalidSetting {
                env_var: key,
                value: raw,
            });
            default
        }),
        None => default,
    }
}

/// Process-wide settings, built once at startup and handed to the router.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub env: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            env: LOCAL_ENV.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            request_timeout: Duration::from_secs(30),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    /// Reads the process environment. Invalid values are returned rather than
    /// logged so the caller can report them once tracing is up.
    pub fn from_env() -> (Self, Vec<InvalidSetting>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<InvalidSetting>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let mut invalid = Vec::new();

        let env = lookup(ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default.env);

        let port = parse_or(&lookup, STORAGE_API_PORT, default.port, &mut invalid);

        let data_path = lookup(DATA_PATH)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(default.data_path);

        let request_timeout_secs: u64 = parse_or(&lookup, REQUEST_TIMEOUT_SECS, 30, &mut invalid);
        let shutdown_timeout_secs: u64 = parse_or(&lookup, SHUTDOWN_TIMEOUT_SECS, 30, &mut invalid);

        let config = Self {
            env,
            port,
            data_path,
            request_timeout: Duration::from_secs(request_timeout_secs),
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
        };

        (config, invalid)
    }

    /// All interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn write_target(&self) -> WriteTarget {
        WriteTarget::new(self.data_path.clone())
    }

    pub fn is_local(&self) -> bool {
        self.env == LOCAL_ENV
    }
}
