// config.rs - Simulation tunables

use std::time::Duration;

use crate::error::{LifeError, Result};
use crate::seed::DEFAULT_LIVE_PROBABILITY;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Tunables for a [`crate::Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Delay between generations while running.
    pub interval: Duration,
    /// Density used when a run starts on an empty grid.
    pub live_probability: f64,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(LifeError::InvalidInterval);
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(LifeError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }
}
