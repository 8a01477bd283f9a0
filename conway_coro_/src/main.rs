// main.rs - Conway's Game of Life on a torus, ticked by a tokio task

use std::sync::{Arc, Mutex, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use conway::{GenerationObserver, Grid, Simulation};
use eframe::egui;
use egui::Color32;

mod config; // Command line options
mod ui; // eframe::App implementation

use config::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (rows, cols) = cli.grid_dimensions();

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let frame = Arc::new(FrameBuffer::new(Grid::new(rows, cols)?));
    let simulation = Simulation::new(
        rows,
        cols,
        cli.simulation_config(),
        frame.clone(),
        runtime.handle().clone(),
    )?;
    log::info!("{rows}x{cols} grid, {:?} per generation", simulation.config().interval);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([cli.width, cli.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            frame.attach(cc.egui_ctx.clone());
            Box::new(GameOfLife::new(simulation, frame, runtime))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

/// Latest generation as last reported by the simulation.
#[derive(Clone)]
pub struct Frame {
    pub grid: Grid,
    pub generation: u64,
}

/// Display side of the simulation: stores each reported generation and
/// asks egui for a repaint.
pub struct FrameBuffer {
    latest: Mutex<Frame>,
    repaint: OnceLock<egui::Context>,
}

impl FrameBuffer {
    fn new(grid: Grid) -> Self {
        Self {
            latest: Mutex::new(Frame { grid, generation: 0 }),
            repaint: OnceLock::new(),
        }
    }

    fn attach(&self, ctx: egui::Context) {
        if self.repaint.set(ctx).is_err() {
            log::warn!("frame buffer already attached to an egui context");
        }
    }

    /// Copy of the latest frame; the lock is not held while painting.
    pub fn latest(&self) -> Frame {
        self.latest
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl GenerationObserver for FrameBuffer {
    fn on_generation_ready(&self, grid: &Grid, generation: u64) {
        {
            let mut latest = self
                .latest
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            latest.grid.clone_from(grid);
            latest.generation = generation;
        }
        if let Some(ctx) = self.repaint.get() {
            ctx.request_repaint();
        }
    }
}

pub struct GameOfLife {
    pub simulation: Simulation,
    pub frame: Arc<FrameBuffer>,
    pub live_color: Color32,
    pub dead_color: Color32,
    /// Set by the "Fit to window" button, applied once the grid area is known.
    pub fit_requested: bool,

    // Declared last so the ticker is aborted before the runtime shuts down.
    _runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    fn new(simulation: Simulation, frame: Arc<FrameBuffer>, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            simulation,
            frame,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            fit_requested: false,
            _runtime: runtime,
        }
    }
}
