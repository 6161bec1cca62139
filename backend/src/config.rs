//! Server settings read from the environment.
//!
//! | variable                      | default     |
//! |-------------------------------|-------------|
//! | `SCHEMA_BUILDER_HOST`         | `127.0.0.1` |
//! | `SCHEMA_BUILDER_PORT`         | `8080`      |
//! | `SCHEMA_BUILDER_OPEN_BROWSER` | `true`      |
//!
//! A value that cannot be parsed is logged and replaced by its default.
//! Log filtering is configured separately through `RUST_LOG`.

use log::warn;
use std::env;

const HOST_VAR: &str = "SCHEMA_BUILDER_HOST";
const PORT_VAR: &str = "SCHEMA_BUILDER_PORT";
const OPEN_BROWSER_VAR: &str = "SCHEMA_BUILDER_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL once the server starts.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|host| !host.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!("Ignoring {}={:?}: {}", PORT_VAR, port, e),
            }
        }

        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            match parse_flag(&flag) {
                Some(open) => config.open_browser = open,
                None => warn!("Ignoring {}={:?}: expected true/false", OPEN_BROWSER_VAR, flag),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
