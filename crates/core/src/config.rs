//! Configuration for runtime-selected behaviour.
//!
//! The core does no file I/O, so configuration is parsed from strings the
//! application has already read. Every field has a default; an empty
//! document is a valid configuration.
//!
//! # Example Config
//!
//! ```toml
//! [arithmetic]
//! policy = "saturating"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Operation};
use crate::integer::{ArithmeticPolicy, Integer};
use crate::outcome::{Outcome, OutcomeExt};

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arithmetic: ArithmeticConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    /// Family used by [`Config::apply`].
    pub policy: ArithmeticPolicy,
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the document is malformed or names
    /// an unknown policy.
    pub fn from_toml_str(source: &str) -> Outcome<Self> {
        toml::from_str::<Self>(source)
            .map_err(|e| Error::config_parse("TOML", e.to_string()))
            .tap_ok(|config| {
                let policy = config.arithmetic.policy;
                tracing::debug!(%policy, "loaded TOML config");
            })
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the document is malformed or names
    /// an unknown policy.
    pub fn from_json_str(source: &str) -> Outcome<Self> {
        serde_json::from_str::<Self>(source)
            .map_err(|e| Error::config_parse("JSON", e.to_string()))
            .tap_ok(|config| {
                let policy = config.arithmetic.policy;
                tracing::debug!(%policy, "loaded JSON config");
            })
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Outcome<String> {
        toml::to_string(self).map_err(|e| Error::config_parse("TOML", e.to_string()))
    }

    /// Replace the arithmetic policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ArithmeticPolicy) -> Self {
        self.arithmetic.policy = policy;
        self
    }

    /// Apply `op` with the configured arithmetic family.
    ///
    /// # Errors
    ///
    /// See [`Integer::apply`].
    pub fn apply(&self, lhs: Integer, op: Operation, rhs: Integer) -> Outcome<Integer> {
        lhs.apply(op, rhs, self.arithmetic.policy)
    }
}
