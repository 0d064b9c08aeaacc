use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ConfigError;
use crate::state::state_from_slice;
use crate::utils::{rng_from_seed, standard_normal_state, StateVector};

/// How the initial state of a model is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Random(RandomStartConfig::default())
    }
}

impl StartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StartConfig::Fixed(fixed) => fixed.state().map(|_| ()),
            StartConfig::Random(_) => Ok(()),
        }
    }

    pub fn initial_state(&self) -> Result<StateVector, ConfigError> {
        match self {
            StartConfig::Fixed(fixed) => fixed.state(),
            StartConfig::Random(random) => Ok(random.generate()),
        }
    }
}

/// Start from an explicit state `[x, y, theta, x_dot, y_dot, theta_dot]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStartConfig {
    pub state: Vec<f64>,
}

impl FixedStartConfig {
    pub fn state(&self) -> Result<StateVector, ConfigError> {
        state_from_slice(&self.state).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Start from independent standard-normal draws.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomStartConfig {
    /// Seed for reproducible starts; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomStartConfig {
    pub fn generate(&self) -> StateVector {
        let mut rng = rng_from_seed(self.seed);
        let state = standard_normal_state(&mut rng);
        info!("Generated random start state: {:?}", state.as_slice());
        state
    }
}
