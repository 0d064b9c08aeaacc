use approx::assert_relative_eq;
use planar_quadrotor::utils::{PoseSample, StateVector};
use planar_quadrotor::TrajectoryHistory;

/// Assert that every state component is finite
#[track_caller]
pub fn assert_state_finite(state: &StateVector) {
    for (i, value) in state.iter().enumerate() {
        assert!(value.is_finite(), "State component {} is not finite: {}", i, value);
    }
}

/// Assert that two states are approximately equal
#[track_caller]
pub fn assert_state_eq(actual: &StateVector, expected: &StateVector, epsilon: f64) {
    for i in 0..6 {
        assert_relative_eq!(
            actual[i],
            expected[i],
            epsilon = epsilon,
            max_relative = epsilon
        );
    }
}

/// Assert that the history holds exactly the given poses, in order
#[track_caller]
pub fn assert_history_matches(history: &TrajectoryHistory, expected: &[PoseSample]) {
    assert_eq!(
        history.len(),
        expected.len(),
        "History holds {} samples, expected {}",
        history.len(),
        expected.len()
    );
    for (i, (actual, expected)) in history.iter().zip(expected).enumerate() {
        assert_eq!(actual, expected, "History sample {} differs", i);
    }
}
