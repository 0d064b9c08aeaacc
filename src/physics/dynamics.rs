use serde::{Deserialize, Serialize};

use super::params::QuadrotorParams;
use super::traits::DynamicsModel;
use crate::utils::{InputVector, StateDerivative, StateVector};

/// Rigid-body dynamics of a quadrotor constrained to the vertical plane.
///
/// Total thrust `u_1 + u_2` is projected onto the inertial axes through the
/// attitude `theta`, gravity acts on `y` only, and differential thrust
/// `u_1 - u_2` produces a torque about the center of mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarDynamics {
    params: QuadrotorParams,
}

impl PlanarDynamics {
    pub fn new(params: QuadrotorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QuadrotorParams {
        &self.params
    }

    /// Thrust split that cancels gravity with no net moment.
    pub fn gravity_comp_input(&self) -> InputVector {
        let QuadrotorParams { mass, gravity, .. } = self.params;
        InputVector::repeat(mass * gravity / 2.0)
    }
}

impl DynamicsModel for PlanarDynamics {
    fn time_derivative(&self, state: &StateVector, input: &InputVector) -> StateDerivative {
        let QuadrotorParams {
            mass: m,
            inertia,
            arm_length: r,
            gravity: g,
        } = self.params;

        let theta = state[2];
        let (u_1, u_2) = (input[0], input[1]);

        let x_dotdot = -(u_1 + u_2) * theta.sin() / m;
        let y_dotdot = (u_1 + u_2) * theta.cos() / m - g;
        let theta_dotdot = r * (u_1 - u_2) / inertia;

        StateDerivative::new(
            state[3],
            state[4],
            state[5],
            x_dotdot,
            y_dotdot,
            theta_dotdot,
        )
    }
}
