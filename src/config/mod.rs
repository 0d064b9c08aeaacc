mod error;
mod sim;
mod start;

pub use error::ConfigError;
pub use sim::SimConfig;
pub use start::{FixedStartConfig, RandomStartConfig, StartConfig};
