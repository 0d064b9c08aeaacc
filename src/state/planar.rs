use super::error::StateError;
use crate::utils::{InputVector, StateVector, INPUT_DIM, STATE_DIM};

/// Build a state vector from a slice, rejecting anything but six components.
pub fn state_from_slice(values: &[f64]) -> Result<StateVector, StateError> {
    check_len("state", values, STATE_DIM)?;
    Ok(StateVector::from_column_slice(values))
}

/// Build an input vector from a slice, rejecting anything but two components.
pub fn input_from_slice(values: &[f64]) -> Result<InputVector, StateError> {
    check_len("input", values, INPUT_DIM)?;
    Ok(InputVector::from_column_slice(values))
}

/// Reject NaN and infinite components.
pub fn ensure_finite<'a, I>(name: &str, values: I) -> Result<(), StateError>
where
    I: IntoIterator<Item = &'a f64>,
{
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(StateError::InvalidValue(format!(
                "{}[{}] is not finite ({})",
                name, index, value
            )));
        }
    }
    Ok(())
}

fn check_len(name: &'static str, values: &[f64], expected: usize) -> Result<(), StateError> {
    if values.len() != expected {
        return Err(StateError::DimensionMismatch {
            name,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
