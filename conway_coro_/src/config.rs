// config.rs - Command line options

use std::time::Duration;

use clap::Parser;
use conway::{SimulationConfig, sizing};

/// Vertical space reserved for the controls above and the stats below the grid.
pub const CONTROLS_HEIGHT: f32 = 160.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "conway_coro", version, about = "Conway's Game of Life on a torus")]
pub struct Cli {
    /// Grid rows (default: fit the window)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns (default: fit the window)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Window inner width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Window inner height in pixels
    #[arg(long, default_value_t = 950.0)]
    pub height: f32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,

    /// Chance of a cell being alive when an empty grid is seeded
    #[arg(long, default_value_t = conway::seed::DEFAULT_LIVE_PROBABILITY)]
    pub live_probability: f64,

    /// Fixed seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            interval: Duration::from_millis(self.interval_ms),
            live_probability: self.live_probability,
            seed: self.seed,
        }
    }

    /// Explicit `--rows`/`--cols` win; anything missing is fitted to the
    /// window area left over after the controls.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let (fit_rows, fit_cols) =
            sizing::fit_to_viewport(self.width, self.height - CONTROLS_HEIGHT);
        (self.rows.unwrap_or(fit_rows), self.cols.unwrap_or(fit_cols))
    }
}
