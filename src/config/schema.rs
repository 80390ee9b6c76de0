//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! exporter. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the exporter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ExporterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Collector subprocess configuration.
    pub collector: CollectorConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9700").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9700".to_string(),
        }
    }
}

/// Collector subprocess configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Executable name, resolved via the process's `$PATH`.
    pub command: String,

    /// Extra arguments passed to the collector. The stock collector
    /// accepts an optional pool name to restrict its output.
    pub args: Vec<String>,

    /// Optional wall-clock limit for one invocation, in seconds.
    /// Unset means the handler blocks until the collector exits,
    /// however long that takes.
    pub timeout_secs: Option<u64>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command: "zpool_prometheus".to_string(),
            args: Vec::new(),
            timeout_secs: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_runnable_exporter() {
        let config = ExporterConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:9700");
        assert_eq!(config.collector.command, "zpool_prometheus");
        assert!(config.collector.args.is_empty());
        assert_eq!(config.collector.timeout_secs, None);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn minimal_toml_fills_in_defaults() {
        let config: ExporterConfig = toml::from_str(
            r#"
            [collector]
            command = "fake_collector"
            "#,
        )
        .unwrap();
        assert_eq!(config.collector.command, "fake_collector");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9700");
    }

    #[test]
    fn timeout_and_args_deserialize() {
        let config: ExporterConfig = toml::from_str(
            r#"
            [collector]
            command = "zpool_prometheus"
            args = ["tank"]
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.collector.args, vec!["tank".to_string()]);
        assert_eq!(config.collector.timeout_secs, Some(10));
    }
}
