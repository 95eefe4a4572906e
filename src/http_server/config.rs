//! HTTP Listener Configuration
//!
//! Where the company API listens and which browser origins may call it.
//! The port is usually overridden by `PORT` or `--port`.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::{ConfigError, ConfigResult};

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to listen on (default: all)
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7777
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Address to bind. The host must be an IP literal.
    pub fn listen_addr(&self) -> ConfigResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ConfigError::Invalid(format!("not a listen address: {}", raw)))
    }

    /// CORS policy for every route
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let origins: Vec<_> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_everywhere_on_7777() {
        let addr = HttpServerConfig::default().listen_addr().unwrap();
        assert_eq!(addr, "0.0.0.0:7777".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_partial_json_keeps_port() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"host": "127.0.0.1"}"#).unwrap();
        assert_eq!(config.listen_addr().unwrap().port(), 7777);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_hostname_is_not_a_listen_address() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.listen_addr(), Err(ConfigError::Invalid(_))));
    }
}
