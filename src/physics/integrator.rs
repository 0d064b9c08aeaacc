use super::error::PhysicsError;
use super::traits::DynamicsModel;
use crate::utils::{InputVector, StateDerivative, StateVector};

/// Timesteps are taken as given, never clamped, but must be usable.
pub fn validate_timestep(dt: f64) -> Result<(), PhysicsError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PhysicsError::InvalidTimestep(dt));
    }
    Ok(())
}

/// Explicit (forward) Euler step `z + dt * z_dot`.
pub fn euler_step(
    state: &StateVector,
    derivative: &StateDerivative,
    dt: f64,
) -> Result<StateVector, PhysicsError> {
    validate_timestep(dt)?;
    Ok(state + derivative * dt)
}

/// Evaluate the dynamics at `(state, input)` and take one Euler step.
pub fn integrate<M: DynamicsModel + ?Sized>(
    model: &M,
    state: &StateVector,
    input: &InputVector,
    dt: f64,
) -> Result<StateVector, PhysicsError> {
    let derivative = model.time_derivative(state, input);
    euler_step(state, &derivative, dt)
}
