use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use crate::physics::PhysicsError;
use crate::state::StateError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
