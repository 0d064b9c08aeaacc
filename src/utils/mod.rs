pub mod constants;
pub mod errors;
pub mod rng;
pub mod types;

pub use constants::*;
pub use errors::*;
pub use rng::*;
pub use types::*;
