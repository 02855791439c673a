//! Engine and loader configuration.
//!
//! Both structs deserialize with `#[serde(default)]`, so a partial JSON
//! document only overrides the fields it names.
//!
//! # Examples
//!
//! ```
//! use wgraph::config::EngineConfig;
//!
//! let cfg = EngineConfig::from_json(r#"{ "verify_postconditions": false }"#).unwrap();
//! assert!(!cfg.verify_postconditions);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Options that control how algorithms run against a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the verification routines on every algorithm result before it is
    /// returned. A failed check surfaces as
    /// [`GraphError::PostconditionViolated`].
    pub verify_postconditions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verify_postconditions: true,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration (verification enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable postcondition verification.
    #[must_use]
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_postconditions = enabled;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedInput`] if the document is not valid.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::malformed(format!("engine config: {e}")))
    }
}

/// Options for the text graph loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Number of the first node in the file (1 for the standard format).
    pub index_base: u32,
    /// Engine options applied to the graph being loaded.
    pub engine: EngineConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            index_base: 1,
            engine: EngineConfig::default(),
        }
    }
}

impl LoaderConfig {
    /// Create the default configuration (1-based node numbers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of the first node in the file.
    #[must_use]
    pub fn with_index_base(mut self, base: u32) -> Self {
        self.index_base = base;
        self
    }

    /// Set the engine options for the loaded graph.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedInput`] if the document is not valid.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::malformed(format!("loader config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_default_verifies() {
        assert!(EngineConfig::default().verify_postconditions);
        assert!(!EngineConfig::new().with_verification(false).verify_postconditions);
    }

    #[test]
    fn test_engine_from_json_partial() {
        let cfg = EngineConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_engine_from_json_invalid() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("engine config"));
    }

    #[test]
    fn test_loader_default_is_one_based() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.index_base, 1);
        assert!(cfg.engine.verify_postconditions);
    }

    #[test]
    fn test_loader_from_json_nested() {
        let cfg = LoaderConfig::from_json(
            r#"{ "index_base": 0, "engine": { "verify_postconditions": false } }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.index_base, 0);
        assert!(!cfg.engine.verify_postconditions);
    }

    #[test]
    fn test_loader_roundtrip_json() {
        let cfg = LoaderConfig::new()
            .with_index_base(0)
            .with_engine(EngineConfig::new().with_verification(false));
        let json = serde_json::to_string(&cfg).expect("serializable");
        assert_eq!(LoaderConfig::from_json(&json).expect("parse back"), cfg);
    }
}
