use crate::utils::{InputVector, StateDerivative, StateVector};

/// Continuous-time dynamics `z_dot = f(z, u)`.
pub trait DynamicsModel {
    fn time_derivative(&self, state: &StateVector, input: &InputVector) -> StateDerivative;
}
