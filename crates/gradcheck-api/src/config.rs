//! # Server Configuration
//!
//! Host, port and CORS settings, read from the environment at startup:
//!
//! | Variable         | Default                              |
//! |------------------|--------------------------------------|
//! | `GRADCHECK_HOST` | `0.0.0.0`                            |
//! | `PORT`           | `5001`                               |
//! | `CORS_ORIGINS`   | Vite dev server origins (see below)  |
//!
//! `CORS_ORIGINS` is a comma-separated list. An explicitly empty value
//! (`CORS_ORIGINS=`) makes CORS permissive.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Allowed browser origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: default_cors_origins(),
        }
    }
}

impl ApiConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("GRADCHECK_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "invalid PORT, using default {DEFAULT_PORT}")
                }
            }
        }

        if let Some(raw) = lookup("CORS_ORIGINS") {
            config.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        config
    }

    /// `host:port` string for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.port, 5001);
        assert_eq!(config.socket_addr(), "0.0.0.0:5001");
        assert!(!config.cors_origins.is_empty());
    }

    #[test]
    fn reads_host_and_port() {
        let config = ApiConfig::from_lookup(lookup(&[("GRADCHECK_HOST", "127.0.0.1"), ("PORT", "8080")]));
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ApiConfig::from_lookup(lookup(&[(
            "CORS_ORIGINS",
            "https://a.example, https://b.example ,",
        )]));
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn empty_cors_origins_means_permissive() {
        let config = ApiConfig::from_lookup(lookup(&[("CORS_ORIGINS", "")]));
        assert!(config.cors_origins.is_empty());
    }
}
