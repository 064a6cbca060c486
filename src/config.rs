// src/config.rs
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Listener
    pub bind_host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout_secs: u64,

    // Identity reported in the Server header
    pub plugin_name: String,
    pub plugin_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            port: 8081,
            workers: 1,
            shutdown_timeout_secs: 5,
            plugin_name: "Classic Web Stats".to_string(),
            plugin_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, keeping the default for every
    /// missing or unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_host: lookup("STATS_BIND_ADDRESS").unwrap_or(defaults.bind_host),
            port: parse_or(&lookup, "STATS_PORT", defaults.port),
            workers: parse_or(&lookup, "STATS_WORKERS", defaults.workers).max(1),
            shutdown_timeout_secs: parse_or(
                &lookup,
                "STATS_SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout_secs,
            ),
            plugin_name: lookup("STATS_PLUGIN_NAME").unwrap_or(defaults.plugin_name),
            plugin_version: lookup("STATS_PLUGIN_VERSION").unwrap_or(defaults.plugin_version),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_listen_locally_on_8081() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn overrides_and_bad_values() {
        let vars: HashMap<&str, &str> = [
            ("STATS_BIND_ADDRESS", "0.0.0.0"),
            ("STATS_PORT", "not a port"),
            ("STATS_WORKERS", "0"),
            ("STATS_PLUGIN_NAME", "Stats"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.workers, 1);
        assert_eq!(config.plugin_name, "Stats");
    }
}
