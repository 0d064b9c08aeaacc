mod error;
mod planar;
mod traits;

pub use error::StateError;
pub use planar::{ensure_finite, input_from_slice, state_from_slice};
pub use traits::PlanarOperations;
