//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::core_types::constants::{
    DEFAULT_FOREST_HEIGHT, DEFAULT_FOREST_WIDTH, DEFAULT_PROBABILITY, DEFAULT_STEP_INTERVAL_MS,
};

/// Construction-time parameters for a forest simulation.
///
/// Every field falls back to its default when missing from a
/// deserialized config. Out-of-range probability or interval values are
/// ignored in favor of the defaults, matching the engine's setter policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Forest width in cells.
    pub width: usize,
    /// Forest height in cells.
    pub height: usize,
    /// Chance (percent, 0-100) that an empty cell regrows a tree per step.
    pub regrowth_probability: u8,
    /// Chance (percent, 0-100) that lightning ignites an unthreatened tree per step.
    pub lightning_probability: u8,
    /// Cadence hint for the external scheduler (milliseconds, 100-5000).
    pub step_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: DEFAULT_FOREST_WIDTH,
            height: DEFAULT_FOREST_HEIGHT,
            regrowth_probability: DEFAULT_PROBABILITY,
            lightning_probability: DEFAULT_PROBABILITY,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = SimulationConfig::default();
        assert_eq!(config.width, 75);
        assert_eq!(config.height, 75);
        assert_eq!(config.regrowth_probability, 0);
        assert_eq!(config.lightning_probability, 0);
        assert_eq!(config.step_interval_ms, 1000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"width": 10, "lightning_probability": 5}"#).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 75);
        assert_eq!(config.lightning_probability, 5);
        assert_eq!(config.step_interval_ms, 1000);
    }
}
