use crate::utils::errors::SimError;

pub trait Vehicle {
    type State;
    type Controls;
    type Config;

    fn new(config: Self::Config) -> Result<Self, SimError>
    where
        Self: Sized;
    fn get_state(&self) -> &Self::State;
    fn set_controls(&mut self, controls: Self::Controls) -> Result<(), SimError>;
    /// Advance by `dt` seconds with the latched controls.
    fn advance(&mut self, dt: f64) -> Result<Self::State, SimError>;
    fn reset(&mut self, state: Self::State);
}
