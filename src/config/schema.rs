//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the request gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Ordered match stages; evaluated front to back.
    pub rules: Vec<RuleConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One match stage.
///
/// ```toml
/// [[rules]]
/// type = "verb"
/// expected = "GET"
///
/// [[rules]]
/// type = "cookie"
/// key = "KEY"
/// expected = "Pa$$w0rd"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Match the leading verb token.
    Verb {
        /// Expected verb, e.g. "GET".
        expected: String,
    },

    /// Match the path token after the verb.
    Route {
        /// Expected path, e.g. "/api/key".
        expected: String,
    },

    /// Match one cookie value by key.
    Cookie {
        /// Cookie key, e.g. "KEY".
        key: String,
        /// Expected cookie value.
        expected: String,
    },
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
