use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),
}
