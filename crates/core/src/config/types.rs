use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::ConfigError;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Deployment workspace name (dev, stage, prod). Required per invocation.
    #[serde(default)]
    pub workspace: Option<String>,
    /// Error reporting DSN. Reporting stays off when unset.
    #[serde(default)]
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Workspace name, or `MissingWorkspace` when it was never configured.
    pub fn require_workspace(&self) -> Result<&str, ConfigError> {
        match self.workspace.as_deref() {
            Some(ws) if !ws.is_empty() => Ok(ws),
            _ => Err(ConfigError::MissingWorkspace),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Search API probe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    pub sentry_configured: bool,
    pub server: ServerConfig,
    pub probe: ProbeConfig,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            workspace: config.workspace.clone(),
            sentry_configured: config
                .sentry_dsn
                .as_deref()
                .is_some_and(|dsn| !dsn.is_empty()),
            server: config.server.clone(),
            probe: config.probe.clone(),
        }
    }
}
