pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod linearize;
pub mod params;
pub mod traits;

pub use dynamics::PlanarDynamics;
pub use error::PhysicsError;
pub use integrator::{euler_step, integrate, validate_timestep};
pub use linearize::{numerical_jacobians, LinearModel};
pub use params::QuadrotorParams;
pub use traits::DynamicsModel;
