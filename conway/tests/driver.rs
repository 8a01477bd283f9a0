use std::sync::{Arc, Mutex};
use std::time::Duration;

use conway::{GenerationObserver, Grid, RunState, Simulation, SimulationConfig};
use tokio::runtime::Handle;

/// Remembers every frame the simulation reports.
#[derive(Default)]
struct Recorder {
    frames: Mutex<Vec<(u64, Grid)>>,
}

impl Recorder {
    fn frames(&self) -> Vec<(u64, Grid)> {
        self.frames.lock().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

impl GenerationObserver for Recorder {
    fn on_generation_ready(&self, grid: &Grid, generation: u64) {
        self.frames.lock().unwrap().push((generation, grid.clone()));
    }
}

fn simulation(rows: usize, cols: usize) -> (Simulation, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let config = SimulationConfig {
        seed: Some(2024),
        ..Default::default()
    };
    let sim = Simulation::new(rows, cols, config, recorder.clone(), Handle::current()).unwrap();
    (sim, recorder)
}

fn place_block(sim: &mut Simulation) {
    for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        assert!(sim.request_toggle(r, c));
    }
}

#[tokio::test(start_paused = true)]
async fn starting_an_empty_grid_seeds_it_first() {
    let (mut sim, recorder) = simulation(10, 10);
    assert!(sim.snapshot().is_all_dead());

    assert!(sim.request_start());

    // Ticker has not been polled yet: the seeded frame is all there is.
    let seeded = sim.snapshot();
    assert!(!seeded.is_all_dead());
    assert!(
        (10..=55).contains(&seeded.live_count()),
        "live cells: {}",
        seeded.live_count()
    );
    assert_eq!(sim.generation(), 0);
    assert_eq!(recorder.frames(), vec![(0, seeded.clone())]);

    tokio::time::sleep(Duration::from_millis(50)).await;

    let frames = recorder.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1], (1, conway::step(&seeded)));
}

#[tokio::test(start_paused = true)]
async fn ticks_follow_the_interval() {
    let (mut sim, recorder) = simulation(8, 8);
    place_block(&mut sim);
    let toggles = recorder.len();

    sim.request_start();
    tokio::time::sleep(Duration::from_millis(350)).await;

    // Immediate first tick, then at 100, 200 and 300 ms.
    assert_eq!(sim.generation(), 4);
    assert_eq!(recorder.len(), toggles + 4);
    assert_eq!(sim.snapshot().live_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn pause_stops_further_generations() {
    let (mut sim, recorder) = simulation(10, 10);
    sim.request_start();
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert!(sim.request_pause());
    assert_eq!(sim.run_state(), RunState::Stopped);
    let generation = sim.generation();
    let grid = sim.snapshot();
    let frames = recorder.len();

    tokio::time::sleep(Duration::from_millis(1_000)).await;

    assert_eq!(sim.generation(), generation);
    assert_eq!(sim.snapshot(), grid);
    assert_eq!(recorder.len(), frames);
    assert!(!sim.request_pause());
}

#[tokio::test(start_paused = true)]
async fn restart_after_pause_resumes_without_reseeding() {
    let (mut sim, _recorder) = simulation(8, 8);
    place_block(&mut sim);

    sim.request_start();
    tokio::time::sleep(Duration::from_millis(150)).await;
    sim.request_pause();
    let paused_at = sim.generation();

    assert!(sim.request_start());
    assert!(!sim.request_start());
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(sim.generation() > paused_at);
    assert_eq!(sim.snapshot().live_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn clear_stops_and_empties() {
    let (mut sim, recorder) = simulation(10, 10);
    sim.request_start();
    tokio::time::sleep(Duration::from_millis(120)).await;

    sim.request_clear();
    assert!(!sim.is_running());
    assert_eq!(sim.generation(), 0);
    assert!(sim.snapshot().is_all_dead());
    let (generation, last) = recorder.frames().pop().unwrap();
    assert_eq!(generation, 0);
    assert!(last.is_all_dead());

    let frames = recorder.len();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(recorder.len(), frames);

    sim.request_clear();
    assert!(sim.snapshot().is_all_dead());
}

#[tokio::test(start_paused = true)]
async fn toggles_only_apply_while_stopped() {
    let (mut sim, recorder) = simulation(6, 6);
    assert!(sim.request_toggle(1, 1));
    assert!(!sim.request_toggle(6, 0));
    assert_eq!(recorder.len(), 1);

    sim.request_start();
    let before = sim.snapshot();
    assert!(!sim.request_toggle(4, 4));
    assert_eq!(sim.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn toggle_run_alternates() {
    let (mut sim, _recorder) = simulation(5, 5);
    assert_eq!(sim.request_toggle_run(), RunState::Running);
    assert_eq!(sim.request_toggle_run(), RunState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn resize_reallocates_and_stops() {
    let (mut sim, recorder) = simulation(5, 5);
    sim.request_start();
    tokio::time::sleep(Duration::from_millis(50)).await;

    sim.resize(3, 7).unwrap();
    assert!(!sim.is_running());
    assert_eq!(sim.dimensions(), (3, 7));
    assert!(sim.snapshot().is_all_dead());
    assert_eq!(recorder.frames().last().unwrap().1.dimensions(), (3, 7));

    assert!(sim.resize(0, 7).is_err());
    assert!(sim.resize(usize::MAX, 2).is_err());
    assert_eq!(sim.dimensions(), (3, 7));
}

#[tokio::test(start_paused = true)]
async fn randomize_stops_resets_generation_and_publishes_once() {
    let (mut sim, recorder) = simulation(10, 10);
    sim.request_start();
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(sim.generation() > 0);
    let frames = recorder.len();

    sim.request_randomize();

    assert!(!sim.is_running());
    assert_eq!(sim.generation(), 0);
    assert!(!sim.snapshot().is_all_dead());
    assert_eq!(recorder.len(), frames + 1);
    assert_eq!(recorder.frames().pop().unwrap(), (0, sim.snapshot()));

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(recorder.len(), frames + 1);
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let config = SimulationConfig {
        live_probability: -0.1,
        ..Default::default()
    };
    let recorder: Arc<dyn GenerationObserver> = Arc::new(Recorder::default());
    assert!(Simulation::new(4, 4, config, recorder.clone(), Handle::current()).is_err());
    assert!(Simulation::new(0, 4, SimulationConfig::default(), recorder, Handle::current()).is_err());
}
