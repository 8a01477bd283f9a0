// lib.rs - Toroidal Conway's Game of Life core

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod seed;
pub mod sizing;
pub mod step;

pub use config::SimulationConfig;
pub use driver::{GenerationObserver, RunState, Simulation};
pub use error::{LifeError, Result};
pub use grid::{Generations, Grid};
pub use step::{live_neighbors, step, step_into};
