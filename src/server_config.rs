use crate::config;
use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONFIG_PATH: &str = "/etc/phish-check/config.toml";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub host: String,
    pub port: u16,
}

impl EffectiveSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

/// Read the port from the `PORT` environment variable.
///
/// Unset is fine; a value that is not a port number is an error.
pub fn env_port() -> Result<Option<u16>> {
    match std::env::var(PORT_ENV) {
        Ok(v) if !v.trim().is_empty() => {
            let port = v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_ENV} is not a valid port: {v:?}"))?;
            Ok(Some(port))
        }
        _ => Ok(None),
    }
}

/// Precedence: CLI, then `PORT` (port only), then config file, then defaults.
pub fn effective_settings(
    cli: &CliOverrides,
    env_port: Option<u16>,
    cfg: Option<&config::Config>,
) -> EffectiveSettings {
    let cfg_server = cfg.and_then(|c| c.server.as_ref());

    let host = cli
        .host
        .clone()
        .or_else(|| cfg_server.and_then(|s| s.host.clone()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = cli
        .port
        .or(env_port)
        .or_else(|| cfg_server.and_then(|s| s.port))
        .unwrap_or(DEFAULT_PORT);

    EffectiveSettings { host, port }
}
