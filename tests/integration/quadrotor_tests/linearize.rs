use approx::assert_relative_eq;
use planar_quadrotor::physics::{numerical_jacobians, LinearModel};
use planar_quadrotor::utils::{InputMatrix, JACOBIAN_DELTA};
use planar_quadrotor::{InputVector, PlanarQuadrotor, StateVector};

use crate::common::{small_craft_params, unit_params, TEST_DT};

#[test]
fn test_linearize_unit_params_closed_form() {
    let quadrotor = PlanarQuadrotor::with_params(unit_params(), StateVector::zeros()).unwrap();
    let (a, b) = quadrotor.linearize().into_tuple();

    // Kinematic block
    assert_eq!(a.fixed_slice::<3, 3>(0, 3).into_owned(), nalgebra::Matrix3::identity());
    assert_eq!(a.fixed_slice::<3, 3>(0, 0).into_owned(), nalgebra::Matrix3::zeros());

    // Acceleration rows: only the theta partial of x_dotdot survives at hover,
    // -(u_1 + u_2) cos(0) / m = -g
    assert_eq!(a[(3, 0)], 0.0);
    assert_eq!(a[(3, 1)], 0.0);
    assert_eq!(a[(3, 2)], -9.8);
    assert_eq!(a[(4, 2)], 0.0);
    assert_eq!(a.fixed_slice::<3, 3>(3, 3).into_owned(), nalgebra::Matrix3::zeros());
    assert_eq!(a.row(5).into_owned(), nalgebra::RowVector6::zeros());

    let expected_b = InputMatrix::from_row_slice(&[
        0.0, 0.0, //
        0.0, 0.0, //
        0.0, 0.0, //
        0.0, 0.0, //
        1.0, 1.0, //
        1.0, -1.0,
    ]);
    assert_eq!(b, expected_b);
}

#[test]
fn test_linearize_general_params() {
    let params = small_craft_params();
    let quadrotor = PlanarQuadrotor::with_params(params, StateVector::zeros()).unwrap();
    let LinearModel { a, b } = quadrotor.linearize();

    assert_relative_eq!(a[(3, 2)], -params.gravity, epsilon = 1e-12);
    assert_relative_eq!(b[(4, 0)], 1.0 / params.mass, epsilon = 1e-12);
    assert_relative_eq!(b[(5, 0)], params.arm_length / params.inertia, epsilon = 1e-9);
    assert_relative_eq!(b[(5, 1)], -params.arm_length / params.inertia, epsilon = 1e-9);
}

#[test]
fn test_linearize_is_pure() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), StateVector::zeros()).unwrap();
    let first = quadrotor.linearize();

    // Moving the model must not change the fixed operating point
    quadrotor
        .update(InputVector::new(7.0, 2.0), TEST_DT)
        .unwrap();
    let second = quadrotor.linearize();

    assert_eq!(first.a, second.a);
    assert_eq!(first.b, second.b);
}

#[test]
fn test_linearize_matches_finite_differences() {
    for params in [unit_params(), small_craft_params()] {
        let quadrotor = PlanarQuadrotor::with_params(params, StateVector::zeros()).unwrap();
        let analytic = quadrotor.linearize();
        let numeric = numerical_jacobians(
            quadrotor.dynamics(),
            &StateVector::zeros(),
            &quadrotor.gravity_comp_input(),
            JACOBIAN_DELTA,
        );

        let scale = analytic.b.amax().max(analytic.a.amax());
        assert_relative_eq!(analytic.a, numeric.a, epsilon = 1e-5 * scale);
        assert_relative_eq!(analytic.b, numeric.b, epsilon = 1e-5 * scale);
    }
}

#[test]
fn test_linear_model_predicts_small_perturbation() {
    let quadrotor = PlanarQuadrotor::with_params(unit_params(), StateVector::zeros()).unwrap();
    let LinearModel { a, b } = quadrotor.linearize();
    let hover = quadrotor.gravity_comp_input();

    let dz = StateVector::new(1e-4, -2e-4, 1e-4, 0.0, 1e-4, -1e-4);
    let du = InputVector::new(1e-4, -1e-4);

    let mut nonlinear = PlanarQuadrotor::with_params(unit_params(), dz).unwrap();
    let next = nonlinear.update(hover + du, TEST_DT).unwrap();

    let predicted: StateVector = dz + TEST_DT * (a * dz + b * du);
    assert_relative_eq!(next, predicted, epsilon = 1e-8);
}

#[test]
fn test_linear_model_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linearized_matrices.csv");

    let quadrotor = PlanarQuadrotor::with_params(unit_params(), StateVector::zeros()).unwrap();
    quadrotor.linearize().save_csv(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    // First match is the A matrix row
    let x_dot_row = text
        .lines()
        .find(|line| line.starts_with("x_dot (m/s)"))
        .unwrap();
    let values: Vec<f64> = x_dot_row
        .split(',')
        .skip(1)
        .map(|v| v.parse().unwrap())
        .collect();

    assert_eq!(values, vec![0.0, 0.0, -9.8, 0.0, 0.0, 0.0]);
}
