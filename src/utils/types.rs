use nalgebra::{Matrix3xX, Matrix6, Matrix6x2, Vector2, Vector3, Vector6};

/// Full state `(x, y, theta, x_dot, y_dot, theta_dot)`.
pub type StateVector = Vector6<f64>;

/// Time derivative of a [`StateVector`].
pub type StateDerivative = Vector6<f64>;

/// Propeller thrusts `(u_1, u_2)` [N].
pub type InputVector = Vector2<f64>;

/// Planar pose `(x, y, theta)` recorded in the trajectory history.
pub type PoseSample = Vector3<f64>;

/// State Jacobian of the dynamics.
pub type StateMatrix = Matrix6<f64>;

/// Input Jacobian of the dynamics.
pub type InputMatrix = Matrix6x2<f64>;

/// Trajectory as a 3 x N matrix, rows are the x, y and theta series.
pub type TrajectoryMatrix = Matrix3xX<f64>;

/// Named indices into a [`StateVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateIndex {
    X = 0,
    Y = 1,
    Theta = 2,
    XDot = 3,
    YDot = 4,
    ThetaDot = 5,
}

impl StateIndex {
    pub const ALL: [StateIndex; 6] = [
        StateIndex::X,
        StateIndex::Y,
        StateIndex::Theta,
        StateIndex::XDot,
        StateIndex::YDot,
        StateIndex::ThetaDot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StateIndex::X => "x (m)",
            StateIndex::Y => "y (m)",
            StateIndex::Theta => "theta (rad)",
            StateIndex::XDot => "x_dot (m/s)",
            StateIndex::YDot => "y_dot (m/s)",
            StateIndex::ThetaDot => "theta_dot (rad/s)",
        }
    }
}

pub const INPUT_LABELS: [&str; 2] = ["u_1 (N)", "u_2 (N)"];
