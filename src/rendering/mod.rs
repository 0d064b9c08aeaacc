mod plotter;
mod types;

pub use plotter::{PngPlotter, TrajectoryPlotter};
pub use types::PlotConfig;
