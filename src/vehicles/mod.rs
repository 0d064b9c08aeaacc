mod quadrotor;
mod traits;

pub use quadrotor::PlanarQuadrotor;
pub use traits::Vehicle;
