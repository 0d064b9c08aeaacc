pub const STANDARD_GRAVITY: f64 = 9.8; // m/s^2

pub const STATE_DIM: usize = 6; // x, y, theta, x_dot, y_dot, theta_dot
pub const INPUT_DIM: usize = 2; // left and right thrust

// Sample window used when a bounded trajectory history is requested
pub const DEFAULT_HISTORY_WINDOW: usize = 400;

// Step used for forward-difference Jacobians
pub const JACOBIAN_DELTA: f64 = 1e-6;
