use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::storage::Storage;
use nalgebra::{Dim, Matrix};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dynamics::PlanarDynamics;
use super::params::QuadrotorParams;
use super::traits::DynamicsModel;
use crate::utils::errors::SimError;
use crate::utils::{
    InputMatrix, InputVector, StateIndex, StateMatrix, StateVector, INPUT_DIM, INPUT_LABELS,
    STATE_DIM,
};

/// State-space model `dz/dt = A z + B u` about an operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub a: StateMatrix,
    pub b: InputMatrix,
}

impl LinearModel {
    /// The `(A, B)` pair.
    pub fn into_tuple(self) -> (StateMatrix, InputMatrix) {
        (self.a, self.b)
    }

    /// Write A and B as labelled CSV tables.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SimError> {
        let state_labels: Vec<&str> = StateIndex::ALL.iter().map(|i| i.label()).collect();

        let mut writer = BufWriter::new(writer);
        write_matrix_csv(
            &mut writer,
            &self.a,
            "A Matrix (dz/dt = Az + Bu)",
            &state_labels,
            &state_labels,
        )?;
        write_matrix_csv(
            &mut writer,
            &self.b,
            "B Matrix (dz/dt = Az + Bu)",
            &state_labels,
            &INPUT_LABELS,
        )?;
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)?;
        debug!("Matrices saved to {}", path.as_ref().display());
        Ok(())
    }
}

impl PlanarDynamics {
    /// Jacobians about hover at the origin with level attitude, driven by
    /// [`PlanarDynamics::gravity_comp_input`].
    pub fn linearize(&self) -> LinearModel {
        self.linearize_about(&StateVector::zeros(), &self.gravity_comp_input())
    }

    /// Analytic Jacobians `df/dz` and `df/du` at an explicit operating point.
    pub fn linearize_about(&self, state: &StateVector, input: &InputVector) -> LinearModel {
        let QuadrotorParams {
            mass: m,
            inertia,
            arm_length: r,
            ..
        } = *self.params();

        let theta = state[2];
        let (u_1, u_2) = (input[0], input[1]);

        let mut a = StateMatrix::zeros();
        let mut b = InputMatrix::zeros();

        // df_i/dz_j
        a.fixed_slice_mut::<3, 3>(0, 3).fill_with_identity();
        a[(3, 2)] = -(u_1 + u_2) * theta.cos() / m;
        a[(4, 2)] = -(u_1 + u_2) * theta.sin() / m;

        // df_i/du_j
        b.row_mut(3).fill(-theta.sin() / m);
        b.row_mut(4).fill(theta.cos() / m);
        b[(5, 0)] = r / inertia;
        b[(5, 1)] = -r / inertia;

        debug!(theta, u_1, u_2, "Linearized planar dynamics");

        LinearModel { a, b }
    }
}

/// Forward-difference Jacobians of any [`DynamicsModel`].
pub fn numerical_jacobians<M: DynamicsModel + ?Sized>(
    model: &M,
    state: &StateVector,
    input: &InputVector,
    delta: f64,
) -> LinearModel {
    let mut a = StateMatrix::zeros();
    let mut b = InputMatrix::zeros();

    let f0 = model.time_derivative(state, input);

    for i in 0..STATE_DIM {
        let mut z_perturbed = *state;
        z_perturbed[i] += delta;
        let fi = model.time_derivative(&z_perturbed, input);
        a.set_column(i, &((fi - f0) / delta));
    }

    for j in 0..INPUT_DIM {
        let mut u_perturbed = *input;
        u_perturbed[j] += delta;
        let fj = model.time_derivative(state, &u_perturbed);
        b.set_column(j, &((fj - f0) / delta));
    }

    LinearModel { a, b }
}

fn write_matrix_csv<W: Write, R: Dim, C: Dim, S: Storage<f64, R, C>>(
    writer: &mut W,
    matrix: &Matrix<f64, R, C, S>,
    title: &str,
    row_labels: &[&str],
    col_labels: &[&str],
) -> std::io::Result<()> {
    writeln!(writer, "{}", title)?;
    write!(writer, "State")?;
    for label in col_labels {
        write!(writer, ",{}", label)?;
    }
    writeln!(writer)?;

    for i in 0..matrix.nrows() {
        write!(writer, "{}", row_labels[i])?;
        for j in 0..matrix.ncols() {
            write!(writer, ",{:.8e}", matrix[(i, j)])?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;
    Ok(())
}
