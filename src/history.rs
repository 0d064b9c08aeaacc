use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::state::StateError;
use crate::utils::{PoseSample, TrajectoryMatrix, DEFAULT_HISTORY_WINDOW};

/// Eviction strategy for the trajectory history, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryPolicy {
    /// Keep every sample.
    #[default]
    Unbounded,
    /// Keep only the most recent `n` samples.
    Window(usize),
}

impl HistoryPolicy {
    /// Bounded window of [`DEFAULT_HISTORY_WINDOW`] samples.
    pub fn default_window() -> Self {
        HistoryPolicy::Window(DEFAULT_HISTORY_WINDOW)
    }

    pub fn validate(&self) -> Result<(), StateError> {
        match self {
            HistoryPolicy::Window(0) => Err(StateError::InvalidValue(
                "History window must hold at least one sample".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// Ordered `(x, y, theta)` samples, one per completed simulation step.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryHistory {
    policy: HistoryPolicy,
    samples: VecDeque<PoseSample>,
}

impl TrajectoryHistory {
    pub fn new(policy: HistoryPolicy) -> Result<Self, StateError> {
        policy.validate()?;

        let samples = match policy {
            HistoryPolicy::Window(capacity) => VecDeque::with_capacity(capacity),
            HistoryPolicy::Unbounded => VecDeque::new(),
        };

        Ok(Self { policy, samples })
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// Append a sample, evicting the oldest one when a window is full.
    pub fn push(&mut self, sample: PoseSample) {
        if let HistoryPolicy::Window(capacity) = self.policy {
            while self.samples.len() >= capacity {
                self.samples.pop_front();
            }
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&PoseSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoseSample> + '_ {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// 3 x N matrix whose rows are the x, y and theta series.
    pub fn to_matrix(&self) -> TrajectoryMatrix {
        TrajectoryMatrix::from_fn(self.samples.len(), |row, col| self.samples[col][row])
    }

    /// A single series: 0 for x, 1 for y, 2 for theta.
    pub fn series(&self, row: usize) -> Vec<f64> {
        self.samples.iter().map(|sample| sample[row]).collect()
    }
}
