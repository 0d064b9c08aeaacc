use std::cell::Cell;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace, warn};

use super::traits::Vehicle;
use crate::config::SimConfig;
use crate::history::{HistoryPolicy, TrajectoryHistory};
use crate::physics::{
    euler_step, validate_timestep, DynamicsModel, LinearModel, PhysicsError, PlanarDynamics,
    QuadrotorParams,
};
use crate::rendering::TrajectoryPlotter;
use crate::state::{
    ensure_finite, input_from_slice, state_from_slice, PlanarOperations, StateError,
};
use crate::utils::errors::SimError;
use crate::utils::{
    standard_normal_state, InputVector, StateDerivative, StateVector, TrajectoryMatrix,
};

/// A quadrotor flying in the vertical plane.
///
/// Owns the state `z = (x, y, theta, x_dot, y_dot, theta_dot)`, the latched
/// thrust input `u = (u_1, u_2)`, a goal state and the `(x, y, theta)`
/// history of every completed step. Parameters are fixed at construction.
#[derive(Debug, Clone)]
pub struct PlanarQuadrotor {
    dynamics: PlanarDynamics,
    z: StateVector,
    z_dot: StateDerivative,
    input: InputVector,
    z_goal: StateVector,
    goal_set: bool,
    missing_goal_warned: Cell<bool>,
    history: TrajectoryHistory,
}

impl PlanarQuadrotor {
    /// Default parameters and a state drawn from N(0, 1) per component,
    /// using a generator seeded from OS entropy for this instance only.
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::build(
            PlanarDynamics::new(QuadrotorParams::default()),
            standard_normal_state(&mut rng),
        )
    }

    /// Random standard-normal state drawn from an injected generator.
    pub fn with_rng<R: Rng + ?Sized>(
        params: QuadrotorParams,
        rng: &mut R,
    ) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self::build(
            PlanarDynamics::new(params),
            standard_normal_state(rng),
        ))
    }

    /// Default parameters and the given state, used verbatim.
    pub fn from_state(z: StateVector) -> Self {
        Self::build(PlanarDynamics::new(QuadrotorParams::default()), z)
    }

    /// Default parameters and a state given as six components.
    pub fn from_slice(z: &[f64]) -> Result<Self, StateError> {
        Ok(Self::from_state(state_from_slice(z)?))
    }

    pub fn with_params(params: QuadrotorParams, z: StateVector) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self::build(PlanarDynamics::new(params), z))
    }

    /// Replace the history eviction policy. Only meaningful before stepping.
    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Result<Self, StateError> {
        self.history = TrajectoryHistory::new(policy)?;
        Ok(self)
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let z = config.start.initial_state()?;
        let mut quadrotor =
            Self::with_params(config.params, z)?.with_history_policy(config.history)?;

        if let Some(goal) = config.goal_state()? {
            quadrotor.set_goal(goal);
        }

        Ok(quadrotor)
    }

    fn build(dynamics: PlanarDynamics, z: StateVector) -> Self {
        info!(
            "Created planar quadrotor with params {:?} at state {:?}",
            dynamics.params().as_array(),
            z.as_slice()
        );

        Self {
            dynamics,
            z,
            z_dot: StateDerivative::zeros(),
            input: InputVector::zeros(),
            z_goal: StateVector::zeros(),
            goal_set: false,
            missing_goal_warned: Cell::new(false),
            history: TrajectoryHistory::default(),
        }
    }

    pub fn params(&self) -> &QuadrotorParams {
        self.dynamics.params()
    }

    pub fn dynamics(&self) -> &PlanarDynamics {
        &self.dynamics
    }

    pub fn set_goal(&mut self, z_goal: StateVector) {
        self.z_goal = z_goal;
        self.goal_set = true;
    }

    pub fn set_goal_slice(&mut self, z_goal: &[f64]) -> Result<(), StateError> {
        self.set_goal(state_from_slice(z_goal)?);
        Ok(())
    }

    pub fn goal(&self) -> StateVector {
        self.z_goal
    }

    pub fn state(&self) -> StateVector {
        self.z
    }

    /// Derivative from the most recent dynamics evaluation.
    pub fn state_derivative(&self) -> StateDerivative {
        self.z_dot
    }

    pub fn input(&self) -> InputVector {
        self.input
    }

    /// Regulation error `z - z_goal`.
    ///
    /// Callers are expected to set a goal first; without one the zero goal is
    /// used and a warning is logged once per model.
    pub fn control_state(&self) -> StateVector {
        if !self.goal_set && !self.missing_goal_warned.replace(true) {
            warn!("Control state requested before a goal was set, using the zero goal");
        }
        self.z - self.z_goal
    }

    pub fn gravity_comp_input(&self) -> InputVector {
        self.dynamics.gravity_comp_input()
    }

    /// Jacobians `(A, B)` about hover at the origin.
    pub fn linearize(&self) -> LinearModel {
        self.dynamics.linearize()
    }

    pub fn set_input(&mut self, input: InputVector) -> Result<(), SimError> {
        ensure_finite("input", input.iter())
            .map_err(|e| SimError::InvalidControl(e.to_string()))?;
        self.input = input;
        Ok(())
    }

    /// Latch an input given as two components.
    pub fn set_input_slice(&mut self, input: &[f64]) -> Result<(), SimError> {
        self.set_input(input_from_slice(input)?)
    }

    /// Recompute `z_dot` from the current state and latched input.
    pub fn calc_time_derivatives(&mut self) -> StateDerivative {
        self.z_dot = self.dynamics.time_derivative(&self.z, &self.input);
        self.z_dot
    }

    /// Euler step using the derivative from the last evaluation.
    pub fn do_update_state(&mut self, dt: f64) -> Result<(), PhysicsError> {
        self.z = euler_step(&self.z, &self.z_dot, dt)?;
        Ok(())
    }

    /// Append the current `(x, y, theta)` to the history.
    pub fn update_history(&mut self) {
        self.history.push(self.z.pose());
    }

    /// Latch `input`, evaluate the dynamics, integrate by `dt` and record the
    /// new pose. Returns the new state.
    pub fn update(&mut self, input: InputVector, dt: f64) -> Result<StateVector, SimError> {
        validate_timestep(dt)?;
        self.set_input(input)?;
        self.calc_time_derivatives();
        self.do_update_state(dt)?;
        self.update_history();

        trace!(dt, state = ?self.z.as_slice(), "Stepped planar quadrotor");
        Ok(self.z)
    }

    /// [`update`](Self::update) with the most recently latched input.
    pub fn step(&mut self, dt: f64) -> Result<StateVector, SimError> {
        self.update(self.input, dt)
    }

    pub fn history(&self) -> &TrajectoryHistory {
        &self.history
    }

    /// Recorded trajectory as a 3 x N matrix (rows x, y, theta).
    pub fn history_matrix(&self) -> TrajectoryMatrix {
        self.history.to_matrix()
    }

    pub fn plot_history<P: TrajectoryPlotter + ?Sized>(&self, plotter: &mut P) -> Result<(), SimError> {
        plotter.plot(&self.history_matrix())
    }

    /// Restore a state, zeroing the input and derivative and clearing the history.
    pub fn reset(&mut self, z: StateVector) {
        self.z = z;
        self.z_dot = StateDerivative::zeros();
        self.input = InputVector::zeros();
        self.history.clear();
    }
}

impl Default for PlanarQuadrotor {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for PlanarQuadrotor {
    type State = StateVector;
    type Controls = InputVector;
    type Config = SimConfig;

    fn new(config: Self::Config) -> Result<Self, SimError> {
        Self::from_config(&config)
    }

    fn get_state(&self) -> &Self::State {
        &self.z
    }

    fn set_controls(&mut self, controls: Self::Controls) -> Result<(), SimError> {
        self.set_input(controls)
    }

    fn advance(&mut self, dt: f64) -> Result<Self::State, SimError> {
        self.step(dt)
    }

    fn reset(&mut self, state: Self::State) {
        PlanarQuadrotor::reset(self, state);
    }
}
