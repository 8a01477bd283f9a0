// driver.rs - Timer-driven run loop
//
// A `Simulation` owns the double-buffered grid and, while running, one
// ticker task on a tokio runtime. Every tick steps the grid under the state
// lock and reports the new generation to a `GenerationObserver`. Pausing
// marks the state stopped under that same lock before aborting the task,
// so a tick that was already scheduled can never land after the pause.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use rand::rngs::StdRng;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::{Generations, Grid};
use crate::seed::{randomize, rng_from};

/// Display side of the simulation.
///
/// Called with the state lock held, once per generation and after every
/// toggle, clear, seed or resize. Implementations must not call back into
/// the [`Simulation`].
pub trait GenerationObserver: Send + Sync {
    fn on_generation_ready(&self, grid: &Grid, generation: u64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

struct SimulationState {
    generations: Generations,
    generation: u64,
    run: RunState,
    /// Bumped on every start; a ticker only steps while its epoch is current.
    epoch: u64,
}

struct Shared {
    state: Mutex<SimulationState>,
    observer: Arc<dyn GenerationObserver>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SimulationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &SimulationState) {
        self.observer
            .on_generation_ready(state.generations.current(), state.generation);
    }

    /// One generation. Returns `false` once the run that owns `epoch` is over.
    fn tick(&self, epoch: u64) -> bool {
        let mut state = self.lock();
        if state.run != RunState::Running || state.epoch != epoch {
            return false;
        }
        state.generations.advance();
        state.generation += 1;
        debug!("generation {}", state.generation);
        self.publish(&state);
        true
    }
}

/// Cancel handle for a running tick loop. Aborts the task on cancel or drop.
struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(runtime: &Handle, shared: Arc<Shared>, epoch: u64, interval: Duration) -> Self {
        let handle = runtime.spawn(async move {
            // First tick completes immediately, then one per interval.
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if !shared.tick(epoch) {
                    break;
                }
            }
        });
        Self { handle }
    }

    fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Grid state plus the animation driver around it.
pub struct Simulation {
    shared: Arc<Shared>,
    runtime: Handle,
    config: SimulationConfig,
    rng: StdRng,
    ticker: Option<Ticker>,
}

impl Simulation {
    /// All-dead `rows` x `cols` simulation, stopped. Ticks are spawned on
    /// `runtime`.
    pub fn new(
        rows: usize,
        cols: usize,
        config: SimulationConfig,
        observer: Arc<dyn GenerationObserver>,
        runtime: Handle,
    ) -> Result<Self> {
        config.validate()?;
        let generations = Generations::new(rows, cols)?;
        let shared = Arc::new(Shared {
            state: Mutex::new(SimulationState {
                generations,
                generation: 0,
                run: RunState::Stopped,
                epoch: 0,
            }),
            observer,
        });
        Ok(Self {
            shared,
            runtime,
            rng: rng_from(config.seed),
            config,
            ticker: None,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.shared.lock().run
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Copy of the current generation.
    pub fn snapshot(&self) -> Grid {
        self.shared.lock().generations.current().clone()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.shared.lock().generations.current().dimensions()
    }

    /// Stopped -> Running. An all-dead grid is seeded first and that seeded
    /// frame is published as generation 0; the first step follows on the
    /// ticker's immediate first tick. Returns `false` if already running.
    pub fn request_start(&mut self) -> bool {
        let epoch = {
            let mut state = self.shared.lock();
            if state.run == RunState::Running {
                return false;
            }
            if state.generations.current().is_all_dead() {
                randomize(
                    state.generations.current_mut(),
                    self.config.live_probability,
                    &mut self.rng,
                );
                state.generation = 0;
                info!(
                    "seeded empty grid with {} live cells",
                    state.generations.current().live_count()
                );
                self.shared.publish(&state);
            }
            state.run = RunState::Running;
            state.epoch += 1;
            state.epoch
        };

        info!("started, ticking every {:?}", self.config.interval);
        self.ticker = Some(Ticker::spawn(
            &self.runtime,
            Arc::clone(&self.shared),
            epoch,
            self.config.interval,
        ));
        true
    }

    /// Running -> Stopped. The grid keeps its last generation. Returns
    /// `false` if already stopped.
    pub fn request_pause(&mut self) -> bool {
        let was_running = self.stop();
        if was_running {
            info!("paused at generation {}", self.generation());
        }
        was_running
    }

    /// Start when stopped, pause when running.
    pub fn request_toggle_run(&mut self) -> RunState {
        if self.is_running() {
            self.request_pause();
        } else {
            self.request_start();
        }
        self.run_state()
    }

    /// Stops any run and kills every cell.
    pub fn request_clear(&mut self) {
        self.stop();
        let mut state = self.shared.lock();
        state.generations.clear();
        state.generation = 0;
        info!("cleared");
        self.shared.publish(&state);
    }

    /// Stops any run and reseeds the whole grid.
    pub fn request_randomize(&mut self) {
        self.stop();
        let mut state = self.shared.lock();
        randomize(
            state.generations.current_mut(),
            self.config.live_probability,
            &mut self.rng,
        );
        state.generation = 0;
        info!(
            "randomized grid, {} live cells",
            state.generations.current().live_count()
        );
        self.shared.publish(&state);
    }

    /// Flips one cell. Ignored while running or outside the grid.
    pub fn request_toggle(&mut self, row: usize, col: usize) -> bool {
        let mut state = self.shared.lock();
        if state.run == RunState::Running {
            debug!("ignoring toggle of ({row}, {col}) while running");
            return false;
        }
        if !state.generations.current_mut().toggle(row, col) {
            debug!("ignoring toggle of ({row}, {col}) outside the grid");
            return false;
        }
        self.shared.publish(&state);
        true
    }

    /// Stops any run and reallocates an all-dead grid of the new size.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let generations = Generations::new(rows, cols)?;
        self.stop();
        let mut state = self.shared.lock();
        state.generations = generations;
        state.generation = 0;
        info!("resized to {rows}x{cols}");
        self.shared.publish(&state);
        Ok(())
    }

    fn stop(&mut self) -> bool {
        let was_running = {
            let mut state = self.shared.lock();
            std::mem::replace(&mut state.run, RunState::Stopped) == RunState::Running
        };
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        was_running
    }
}
