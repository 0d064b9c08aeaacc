//! # planar-quadrotor
//! Dynamics of a quadrotor constrained to the vertical plane: a rigid body
//! with two propellers, state `(x, y, theta, x_dot, y_dot, theta_dot)` and
//! thrust input `(u_1, u_2)`.
//!
//! [`PlanarQuadrotor`] owns the state, steps it with explicit Euler
//! integration, records the `(x, y, theta)` trajectory and linearizes the
//! dynamics about hover for controller design.
//!
//! [`physics`] holds the dynamics, integrator and linearization on their own;
//! [`config`] builds models from YAML or JSON; [`rendering`] plots recorded
//! trajectories.

pub mod config;
pub mod history;
pub mod physics;
pub mod rendering;
pub mod state;
pub mod utils;
pub mod vehicles;

pub use config::SimConfig;
pub use history::{HistoryPolicy, TrajectoryHistory};
pub use physics::{LinearModel, PlanarDynamics, QuadrotorParams};
pub use rendering::{PngPlotter, TrajectoryPlotter};
pub use utils::errors::SimError;
pub use utils::{InputVector, StateVector};
pub use vehicles::{PlanarQuadrotor, Vehicle};
