use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub screen_dims: Vec2,
    /// Blank border kept around the projected trajectory [px]
    pub margin: f32,
    pub line_width: f32,
    /// Screen-space angle of the theta axis in the oblique projection [rad]
    pub theta_axis_angle: f32,
    /// Screen-space length of one radian along the theta axis, relative to one metre
    pub theta_axis_scale: f32,
    pub background: [u8; 4],
    pub trace_color: [u8; 4],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            screen_dims: Vec2::new(1024.0, 1024.0),
            margin: 48.0,
            line_width: 2.0,
            theta_axis_angle: std::f32::consts::FRAC_PI_6,
            theta_axis_scale: 0.5,
            background: [255, 255, 255, 255],
            trace_color: [255, 0, 0, 200],
        }
    }
}
