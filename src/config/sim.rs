use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::error::ConfigError;
use super::start::StartConfig;
use crate::history::HistoryPolicy;
use crate::physics::QuadrotorParams;
use crate::state::state_from_slice;
use crate::utils::StateVector;

/// Everything needed to build a [`PlanarQuadrotor`](crate::PlanarQuadrotor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub params: QuadrotorParams,
    pub start: StartConfig,
    /// Goal state, six components when present
    pub goal: Option<Vec<f64>>,
    pub history: HistoryPolicy,
}

impl SimConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded quadrotor config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        self.start.validate()?;
        self.goal_state()?;
        self.history
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(())
    }

    pub fn goal_state(&self) -> Result<Option<StateVector>, ConfigError> {
        self.goal
            .as_deref()
            .map(state_from_slice)
            .transpose()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
