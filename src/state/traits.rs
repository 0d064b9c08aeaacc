use nalgebra::Vector2;

use crate::utils::{PoseSample, StateVector};

/// Named access to the components of a planar state.
pub trait PlanarOperations {
    fn position(&self) -> Vector2<f64>;
    fn attitude(&self) -> f64;
    fn velocity(&self) -> Vector2<f64>;
    fn angular_velocity(&self) -> f64;

    /// `(x, y, theta)`, the slice kept in the trajectory history.
    fn pose(&self) -> PoseSample {
        let position = self.position();
        PoseSample::new(position.x, position.y, self.attitude())
    }
}

impl PlanarOperations for StateVector {
    fn position(&self) -> Vector2<f64> {
        Vector2::new(self[0], self[1])
    }

    fn attitude(&self) -> f64 {
        self[2]
    }

    fn velocity(&self) -> Vector2<f64> {
        Vector2::new(self[3], self[4])
    }

    fn angular_velocity(&self) -> f64 {
        self[5]
    }
}
