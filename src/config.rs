//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! `STATS_API_*` environment variables, then command-line flags.
//!
//! ```json
//! {
//!   "host": "127.0.0.1",
//!   "port": 8080,
//!   "max_numbers": 50000
//! }
//! ```

use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
    /// Largest `numbers` array accepted.
    pub max_numbers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 2 * 1024 * 1024,
            max_numbers: 1_000_000,
        }
    }
}

impl ServerConfig {
    /// Loads the config from a JSON file at `path`. Missing keys keep their defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;
        Ok(config)
    }

    /// Overrides fields from `STATS_API_*` environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("STATS_API_HOST") {
            self.host = host;
        }
        if let Some(port) = parse_var(&lookup, "STATS_API_PORT")? {
            self.port = port;
        }
        if let Some(bytes) = parse_var(&lookup, "STATS_API_MAX_BODY_BYTES")? {
            self.max_body_bytes = bytes;
        }
        if let Some(max) = parse_var(&lookup, "STATS_API_MAX_NUMBERS")? {
            self.max_numbers = max;
        }
        Ok(self)
    }

    /// Address to bind the listener to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("Invalid value {:?} for {}: {}", raw, key, e)),
    }
}
