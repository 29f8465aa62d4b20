//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BUS_BIND_ADDR";

/// Environment variable holding the network snapshot path.
pub const NETWORK_PATH_VAR: &str = "BUS_NETWORK_PATH";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_NETWORK_PATH: &str = "network.json";

/// Error returned for an unusable configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: expected host:port")]
    InvalidAddress { var: &'static str, value: String },
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub network_path: PathBuf,
}

impl ServerConfig {
    /// Read settings from the process environment, with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse().map_err(|_| ConfigError::InvalidAddress {
            var: BIND_ADDR_VAR,
            value: addr.clone(),
        })?;

        let network_path = lookup(NETWORK_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_PATH));

        Ok(Self {
            bind_addr,
            network_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.network_path, PathBuf::from("network.json"));
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (NETWORK_PATH_VAR, "/data/cdmx.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.network_path, PathBuf::from("/data/cdmx.json"));
    }

    #[test]
    fn invalid_address() {
        let err = ServerConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidAddress {
                var: BIND_ADDR_VAR,
                value: "localhost".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#"invalid BUS_BIND_ADDR "localhost": expected host:port"#
        );
    }
}
