//! Client configuration.
//!
//! The server location comes from the environment, matching the variables
//! the Kiosk tooling has always used:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `KIOSK_SERVER` | `localhost` | server host |
//! | `KIOSK_PORT` | `8080` | server port |
//! | `KIOSK_USE_TLS` | `false` | use `https` |
//! | `KIOSK_TIMEOUT_SECS` | `10` | per-request timeout |

use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_SERVER: &str = "KIOSK_SERVER";
pub const ENV_PORT: &str = "KIOSK_PORT";
pub const ENV_USE_TLS: &str = "KIOSK_USE_TLS";
pub const ENV_TIMEOUT_SECS: &str = "KIOSK_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the Display service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            use_tls: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// ## Examples
    ///
    /// ```
    /// use kiosk_client::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|var| match var {
    ///     "KIOSK_SERVER" => Some("kiosk.example.com".to_string()),
    ///     "KIOSK_USE_TLS" => Some("true".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.base_url(), "https://kiosk.example.com:8080");
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_SERVER).filter(|h| !h.is_empty()) {
            config.host = host;
        }

        if let Some(port) = lookup(ENV_PORT).filter(|p| !p.is_empty()) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: ENV_PORT,
                value: port.clone(),
            })?;
        }

        if let Some(flag) = lookup(ENV_USE_TLS).filter(|f| !f.is_empty()) {
            config.use_tls = parse_flag(ENV_USE_TLS, &flag)?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|s| !s.is_empty()) {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                var: ENV_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
