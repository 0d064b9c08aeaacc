use planar_quadrotor::state::PlanarOperations;
use planar_quadrotor::utils::PoseSample;
use planar_quadrotor::{HistoryPolicy, PlanarQuadrotor, PngPlotter, SimError, StateVector};
use planar_quadrotor::rendering::PlotConfig;

use crate::common::{
    assert_history_matches, differential_input, perturbed_state, unit_params, RecordingPlotter,
    TEST_DT,
};

#[test]
fn test_history_grows_one_sample_per_step() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state()).unwrap();
    let mut expected = Vec::new();

    for n in 1..=50 {
        let z = quadrotor.update(differential_input(), TEST_DT).unwrap();
        expected.push(PoseSample::new(z[0], z[1], z[2]));
        assert_eq!(quadrotor.history().len(), n);
    }

    assert_history_matches(quadrotor.history(), &expected);
}

#[test]
fn test_history_matrix_rows_are_series() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state()).unwrap();
    let mut states = Vec::new();
    for _ in 0..5 {
        states.push(quadrotor.update(differential_input(), TEST_DT).unwrap());
    }

    let matrix = quadrotor.history_matrix();
    assert_eq!(matrix.nrows(), 3);
    assert_eq!(matrix.ncols(), 5);

    for (col, z) in states.iter().enumerate() {
        assert_eq!(matrix.column(col).into_owned(), z.pose());
    }
    assert_eq!(
        quadrotor.history().series(2),
        states.iter().map(|z| z[2]).collect::<Vec<_>>()
    );
}

#[test]
fn test_history_is_unbounded_by_default() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), StateVector::zeros()).unwrap();
    let hover = quadrotor.gravity_comp_input();

    for _ in 0..2000 {
        quadrotor.update(hover, TEST_DT).unwrap();
    }
    assert_eq!(quadrotor.history().len(), 2000);
}

#[test]
fn test_windowed_history_keeps_most_recent() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state())
        .unwrap()
        .with_history_policy(HistoryPolicy::Window(10))
        .unwrap();

    let mut poses = Vec::new();
    for _ in 0..25 {
        let z = quadrotor.update(differential_input(), TEST_DT).unwrap();
        poses.push(z.pose());
    }

    assert_history_matches(quadrotor.history(), &poses[15..]);
}

#[test]
fn test_plot_history_hands_over_trajectory() {
    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state()).unwrap();
    for _ in 0..8 {
        quadrotor.update(differential_input(), TEST_DT).unwrap();
    }

    let mut plotter = RecordingPlotter::default();
    quadrotor.plot_history(&mut plotter).unwrap();

    assert_eq!(plotter.plots.len(), 1);
    assert_eq!(plotter.plots[0], quadrotor.history_matrix());
}

#[test]
fn test_plot_history_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.png");

    let mut quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state()).unwrap();
    for _ in 0..100 {
        quadrotor.update(differential_input(), TEST_DT).unwrap();
    }

    let mut plotter = PngPlotter::new(&path, PlotConfig::default());
    quadrotor.plot_history(&mut plotter).unwrap();

    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_plot_empty_history_fails() {
    let quadrotor = PlanarQuadrotor::with_params(unit_params(), perturbed_state()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let mut plotter = PngPlotter::new(dir.path().join("empty.png"), PlotConfig::default());

    assert!(matches!(
        quadrotor.plot_history(&mut plotter),
        Err(SimError::RenderError(_))
    ));
}
