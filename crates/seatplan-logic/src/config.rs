//! Cabin configuration loading.
//!
//! A configuration is a small JSON document naming the bays, leftmost
//! first, as `[columns, rows]` pairs, and the length of the passenger
//! queue waiting to board:
//!
//! ```json
//! { "bays": [[3, 2], [4, 3], [2, 3], [3, 4]], "queue_length": 30 }
//! ```
//!
//! Loading only checks the JSON shape. Dimension checks happen when the
//! seat map is computed.

use crate::cabin::CabinLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in cabin shipped with the workspace.
const DEFAULT_CABIN_JSON: &str = include_str!("../../../data/default_cabin.json");

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cabin config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Bay layout plus queue length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingConfig {
    pub bays: CabinLayout,
    #[serde(default)]
    pub queue_length: usize,
}

impl BoardingConfig {
    pub fn new(bays: CabinLayout, queue_length: usize) -> Self {
        Self { bays, queue_length }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Four-bay cabin with a queue of 30.
    pub fn default_cabin() -> Result<Self, ConfigError> {
        Self::from_json_str(DEFAULT_CABIN_JSON)
    }

    pub fn layout(&self) -> &CabinLayout {
        &self.bays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bay::BayDimensions;

    #[test]
    fn default_cabin_parses() {
        let config = BoardingConfig::default_cabin().unwrap();
        assert_eq!(config.queue_length, 30);
        assert_eq!(config.layout().bay_count(), 4);
        assert_eq!(config.layout().bays()[1], BayDimensions::new(4, 3));
        assert!(config.layout().validate().is_ok());
    }

    #[test]
    fn queue_length_defaults_to_zero() {
        let config = BoardingConfig::from_json_str(r#"{ "bays": [[2, 2]] }"#).unwrap();
        assert_eq!(config.queue_length, 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = BoardingConfig::from_json_str(r#"{ "bays": [[2]] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = BoardingConfig::from_json_str(r#"{ "bays": [[-1, 2]] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = BoardingConfig::load("/nonexistent/seatplan/cabin.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("cabin.json"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = BoardingConfig::new(CabinLayout::from_pairs(&[[2, 2], [3, 3]]), 13);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"bays":[[2,2],[3,3]],"queue_length":13}"#);
        assert_eq!(BoardingConfig::from_json_str(&json).unwrap(), config);
    }
}
