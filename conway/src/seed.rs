// seed.rs - Random seeding of a grid

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;

/// Probability of a cell starting alive when a run is seeded.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.3;

/// Overwrites every cell: alive with probability `live_probability`,
/// dead otherwise. Values outside `0.0..=1.0` saturate.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, live_probability: f64, rng: &mut R) {
    for cell in grid.cells_mut() {
        *cell = rng.r#gen::<f64>() < live_probability;
    }
}

/// Deterministic generator when a seed is given, entropy otherwise.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
