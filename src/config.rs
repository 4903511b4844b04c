// In: src/config.rs

//! The single source of truth for the tunable parameters of a `BitStream`.
//!
//! A `BitStreamConfig` is created once (in code, or loaded from JSON at an
//! application boundary) and handed to `BitStream::with_config`. Only the
//! storage policy is configurable; the wire format is fixed.

use serde::{Deserialize, Serialize};

use crate::error::{BitStreamError, Result};

//==================================================================================
// I. Defaults
//==================================================================================

/// Bytes pre-allocated by a fresh, empty stream.
pub const DEFAULT_INITIAL_CAPACITY_BYTES: usize = 32;

/// Bytes added to the storage per growth step.
pub const DEFAULT_GROWTH_INCREMENT_BYTES: usize = 32;

/// Provides a default for `initial_capacity_bytes` for serde.
fn default_initial_capacity_bytes() -> usize {
    DEFAULT_INITIAL_CAPACITY_BYTES
}

/// Provides a default for `growth_increment_bytes` for serde.
fn default_growth_increment_bytes() -> usize {
    DEFAULT_GROWTH_INCREMENT_BYTES
}

//==================================================================================
// II. The Unified BitStreamConfig
//==================================================================================

/// Storage policy for a `BitStream`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BitStreamConfig {
    /// Capacity, in bytes, of the zero-filled storage of an empty stream.
    /// Zero is allowed; the first write then triggers a growth step.
    #[serde(default = "default_initial_capacity_bytes")]
    pub initial_capacity_bytes: usize,

    /// Size, in bytes, of one growth step. When a write needs more than one
    /// step, the storage is grown by the smallest multiple that fits.
    #[serde(default = "default_growth_increment_bytes")]
    pub growth_increment_bytes: usize,
}

impl Default for BitStreamConfig {
    fn default() -> Self {
        Self {
            initial_capacity_bytes: DEFAULT_INITIAL_CAPACITY_BYTES,
            growth_increment_bytes: DEFAULT_GROWTH_INCREMENT_BYTES,
        }
    }
}

impl BitStreamConfig {
    /// Checks the config for values the growth policy cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.growth_increment_bytes == 0 {
            return Err(BitStreamError::InvalidConfig(
                "growth_increment_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a config from a JSON document. Missing fields fall
    /// back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BitStreamConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

//==================================================================================
// III. Unit Tests
//==================================================================================
