// In: src/config.rs

//! The single source of truth for dispatch configuration.
//!
//! `DispatchConfig` is created once at the application boundary (e.g., from a
//! host's JSON settings) and then shared read-only as an `Arc<DispatchConfig>`
//! by every `Dispatcher`. Stateless entry points use `DispatchConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

//==================================================================================
// I. Marker Classes
//==================================================================================

/// The reserved class names that act purely as type signals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct MarkerClasses {
    /// Marks a generic sequence as a data frame.
    #[serde(default = "default_data_frame")]
    pub data_frame: String,

    /// Marks an extensible value as a vector without asking the resolver.
    #[serde(default = "default_base_vector")]
    pub base_vector: String,

    /// Marks a record (field-per-component) vector.
    #[serde(default = "default_record")]
    pub record: String,

    /// Legacy date/time-list class, accepted as an alias of `record`.
    #[serde(default = "default_legacy_record")]
    pub legacy_record: String,

    /// Marks a scalar object that must never be treated as a vector.
    #[serde(default = "default_scalar")]
    pub scalar: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            data_frame: default_data_frame(),
            base_vector: default_base_vector(),
            record: default_record(),
            legacy_record: default_legacy_record(),
            scalar: default_scalar(),
        }
    }
}

fn default_data_frame() -> String {
    "data.frame".to_string()
}

fn default_base_vector() -> String {
    "vctrs_vctr".to_string()
}

fn default_record() -> String {
    "vctrs_rcrd".to_string()
}

fn default_legacy_record() -> String {
    "POSIXlt".to_string()
}

fn default_scalar() -> String {
    "vctrs_sclr".to_string()
}

//==================================================================================
// II. The Unified DispatchConfig
//==================================================================================

/// The unified configuration for classification and dispatch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DispatchConfig {
    #[serde(default)]
    pub markers: MarkerClasses,
}

impl DispatchConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
