use serde::{Deserialize, Serialize};

use super::error::PhysicsError;
use crate::utils::STANDARD_GRAVITY;

/// Physical constants of the planar quadrotor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrotorParams {
    /// Mass [kg]
    pub mass: f64,
    /// Rotational inertia about the out-of-plane axis [kg⋅m²]
    pub inertia: f64,
    /// Moment arm of each propeller from the center of mass [m]
    pub arm_length: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
}

impl Default for QuadrotorParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: 1.0,
            arm_length: 1.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl QuadrotorParams {
    /// Create a validated parameter set
    pub fn new(mass: f64, inertia: f64, arm_length: f64, gravity: f64) -> Result<Self, PhysicsError> {
        let params = Self {
            mass,
            inertia,
            arm_length,
            gravity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Mass and inertia divide the dynamics, so both must be strictly positive.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "Mass must be positive, got {}",
                self.mass
            )));
        }

        if !(self.inertia.is_finite() && self.inertia > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "Inertia must be positive, got {}",
                self.inertia
            )));
        }

        if !self.arm_length.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "Arm length must be finite, got {}",
                self.arm_length
            )));
        }

        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "Gravity must be finite, got {}",
                self.gravity
            )));
        }

        Ok(())
    }

    /// Parameters as `[m, I, r, g]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.mass, self.inertia, self.arm_length, self.gravity]
    }
}
