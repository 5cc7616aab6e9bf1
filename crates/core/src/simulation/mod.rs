//! Forest fire simulation engine
//!
//! `ForestSimulation` owns the grid and drives the probabilistic update rule:
//! empty cells may regrow a tree, trees catch fire from a burning neighbor or
//! a random lightning strike, and a burning cell burns out to empty in one
//! step. Each update pass computes a complete next grid from the current one
//! and swaps it in under the engine's write lock, so readers never observe a
//! half-updated forest.
//!
//! The engine keeps no timer of its own: an external scheduler reads
//! `step_interval_ms()` and calls `tick()` at that cadence while the engine
//! is running.

pub mod observer;
pub mod stats;

pub use observer::SimulationEvent;
pub use stats::ForestStats;

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tracing::{debug, info};

use self::observer::ObserverRegistry;
use crate::core_types::constants::{
    DEFAULT_PROBABILITY, DEFAULT_STEP_INTERVAL_MS, MAXIMUM_PROBABILITY, MAXIMUM_STEP_INTERVAL_MS,
    MINIMUM_PROBABILITY, MINIMUM_STEP_INTERVAL_MS, ONE_HUNDRED_PERCENT_PROBABILITY,
    ZERO_PERCENT_PROBABILITY,
};
use crate::core_types::{CellState, SimulationConfig};
use crate::grid::{ForestGrid, GridError};

/// Grid and random source, guarded together by the engine's lock.
struct EngineState {
    grid: ForestGrid,
    rng: ChaCha12Rng,
}

/// The forest fire simulation engine.
///
/// The grid and the random source live behind a per-engine reader/writer
/// lock: update passes and ignition take the write lock, while renderers take
/// the read lock and may run concurrently. Run state and configuration are
/// single-word atomics readable without the lock, so UI callers can poll
/// `is_running()` cheaply at any time.
pub struct ForestSimulation {
    state: RwLock<EngineState>,
    regrowth_probability: AtomicU8,
    lightning_probability: AtomicU8,
    step_interval_ms: AtomicU64,
    running: AtomicBool,
    step_count: AtomicU64,
    observers: ObserverRegistry,
}

impl ForestSimulation {
    /// Create an engine with a fully grown forest and an OS-seeded generator.
    ///
    /// Out-of-range probability or interval values in the config fall back to
    /// the defaults, the same silent-ignore policy the setters apply.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimension` when a configured dimension is
    /// zero.
    pub fn new(config: &SimulationConfig) -> Result<Self, GridError> {
        Self::with_rng(config, ChaCha12Rng::from_os_rng())
    }

    /// Create an engine with a deterministic generator, for reproducible
    /// runs.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimension` when a configured dimension is
    /// zero.
    pub fn with_seed(config: &SimulationConfig, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, ChaCha12Rng::seed_from_u64(seed))
    }

    fn with_rng(config: &SimulationConfig, rng: ChaCha12Rng) -> Result<Self, GridError> {
        let grid = ForestGrid::new(config.width, config.height, CellState::Tree)?;

        let sim = ForestSimulation {
            state: RwLock::new(EngineState { grid, rng }),
            regrowth_probability: AtomicU8::new(DEFAULT_PROBABILITY),
            lightning_probability: AtomicU8::new(DEFAULT_PROBABILITY),
            step_interval_ms: AtomicU64::new(DEFAULT_STEP_INTERVAL_MS),
            running: AtomicBool::new(false),
            step_count: AtomicU64::new(0),
            observers: ObserverRegistry::default(),
        };

        // Configured values go through the guarded setters, so out-of-range
        // entries are ignored and the defaults stand.
        sim.set_regrowth_probability(config.regrowth_probability);
        sim.set_lightning_probability(config.lightning_probability);
        sim.set_step_interval_ms(config.step_interval_ms);

        Ok(sim)
    }

    /// True between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Begin a run. No-op if already running.
    ///
    /// The engine only flips its flag; the external scheduler is expected to
    /// call `tick()` every `step_interval_ms()` while `is_running()` holds.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::Relaxed) {
            return;
        }

        info!("Simulation started");
        self.observers.notify(SimulationEvent::Started);
    }

    /// End a run. No-op if not running.
    ///
    /// Never interrupts an update pass already in progress, only prevents
    /// future ones.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::Relaxed) {
            return;
        }

        info!("Simulation stopped");
        self.observers.notify(SimulationEvent::Stopped);
    }

    /// Stop the run (if any) and regrow the whole forest.
    pub fn reset(&self) {
        self.stop();

        self.write_state().grid.fill(CellState::Tree);
        self.step_count.store(0, Ordering::Relaxed);

        info!("Forest reset to all trees");
        self.observers.notify(SimulationEvent::Reset);
    }

    /// Advance one step manually.
    ///
    /// Only permitted while stopped; returns whether a pass ran.
    pub fn step(&self) -> bool {
        if self.is_running() {
            return false;
        }

        self.advance();
        true
    }

    /// Advance one step on behalf of the external scheduler.
    ///
    /// Only runs while the engine is running; returns whether a pass ran.
    pub fn tick(&self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.advance();
        true
    }

    /// Set the tree at `index` on fire.
    ///
    /// Permitted regardless of the running state. Igniting an empty or
    /// already-burning cell, or an out-of-range index, is a silent no-op.
    /// Returns whether a cell caught fire.
    pub fn ignite(&self, index: usize) -> bool {
        let ignited = {
            let mut state = self.write_state();
            if state.grid.get(index) == Ok(CellState::Tree) {
                state.grid.set(index, CellState::Burning).is_ok()
            } else {
                false
            }
        };

        if ignited {
            info!(index, "Tree ignited by external caller");
            self.observers.notify(SimulationEvent::Ignited { index });
        }

        ignited
    }

    /// Chance (percent) that an empty cell regrows a tree per step.
    pub fn regrowth_probability(&self) -> u8 {
        self.regrowth_probability.load(Ordering::Relaxed)
    }

    /// Update the regrowth probability. Values above 100 are ignored.
    pub fn set_regrowth_probability(&self, percent: u8) {
        if percent <= ONE_HUNDRED_PERCENT_PROBABILITY {
            self.regrowth_probability.store(percent, Ordering::Relaxed);
        }
    }

    /// Chance (percent) that lightning ignites an unthreatened tree per step.
    pub fn lightning_probability(&self) -> u8 {
        self.lightning_probability.load(Ordering::Relaxed)
    }

    /// Update the lightning probability. Values above 100 are ignored.
    pub fn set_lightning_probability(&self, percent: u8) {
        if percent <= ONE_HUNDRED_PERCENT_PROBABILITY {
            self.lightning_probability.store(percent, Ordering::Relaxed);
        }
    }

    /// Cadence hint for the external scheduler (milliseconds).
    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms.load(Ordering::Relaxed)
    }

    /// Update the scheduler cadence hint. Values outside [100, 5000] ms are
    /// ignored.
    pub fn set_step_interval_ms(&self, millis: u64) {
        if (MINIMUM_STEP_INTERVAL_MS..=MAXIMUM_STEP_INTERVAL_MS).contains(&millis) {
            self.step_interval_ms.store(millis, Ordering::Relaxed);
        }
    }

    /// Grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        let state = self.read_state();
        (state.grid.width(), state.grid.height())
    }

    /// Row-major copy of the current cell states, for rendering.
    pub fn snapshot(&self) -> Vec<CellState> {
        self.read_state().grid.cells().to_vec()
    }

    /// Cell counts for the current grid.
    pub fn stats(&self) -> ForestStats {
        ForestStats::census(self.read_state().grid.cells())
    }

    /// Number of completed update passes since construction or reset.
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    /// Register an observer invoked after `start`, `stop`, `reset`, every
    /// completed update pass, and every successful `ignite`.
    ///
    /// Callbacks run outside the engine's state lock and may read the engine,
    /// but must not issue engine commands or register further observers.
    pub fn on_state_changed(&self, callback: impl Fn(SimulationEvent) + Send + Sync + 'static) {
        self.observers.register(Box::new(callback));
    }

    /// One full compute-and-swap update pass.
    fn advance(&self) {
        let regrowth = self.regrowth_probability();
        let lightning = self.lightning_probability();

        {
            let mut guard = self.write_state();
            let EngineState { grid, rng } = &mut *guard;

            let mut next = Vec::with_capacity(grid.len());
            for index in 0..grid.len() {
                let next_state = match grid.cells()[index] {
                    CellState::Empty => {
                        if probability_fires(rng, regrowth) {
                            CellState::Tree
                        } else {
                            CellState::Empty
                        }
                    }
                    // Lightning is only consulted for trees no neighbor has
                    // already doomed.
                    CellState::Tree => {
                        if has_burning_neighbor(grid, index) || probability_fires(rng, lightning) {
                            CellState::Burning
                        } else {
                            CellState::Tree
                        }
                    }
                    CellState::Burning => CellState::Empty,
                };
                next.push(next_state);
            }

            // Single swap: the old grid stays untouched until every index has
            // been computed.
            *grid = ForestGrid::from_cells(grid.width(), grid.height(), next);
        }

        let completed = self.step_count.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(step = completed, "Update pass completed");
        self.observers.notify(SimulationEvent::Stepped);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Evaluate a percent probability: 0 never fires, 100 always fires, and
/// anything between draws a uniform integer in [1, 99] and fires when the
/// draw is at most the threshold. The boundary thresholds 1 and 99 are
/// regular draws, not special cases.
fn probability_fires(rng: &mut ChaCha12Rng, percent: u8) -> bool {
    if percent == ZERO_PERCENT_PROBABILITY {
        return false;
    }
    if percent >= ONE_HUNDRED_PERCENT_PROBABILITY {
        return true;
    }

    let draw = rng.random_range(MINIMUM_PROBABILITY..MAXIMUM_PROBABILITY);
    draw <= percent
}

/// True when any in-bounds 8-neighbor of `index` is burning in the current
/// grid.
///
/// Edge membership is derived from the row-major index alone and the grid
/// does not wrap: top-row cells have no northern neighbors, leftmost-column
/// cells none to the west, and so on; corners combine two exclusions. An
/// out-of-bounds probe reads as "neighbor absent".
fn has_burning_neighbor(grid: &ForestGrid, index: usize) -> bool {
    let width = grid.width();
    let len = grid.len();

    let top_edge = index < width;
    let bottom_edge = index + width >= len;
    let left_edge = index % width == 0;
    let right_edge = (index + 1) % width == 0;

    let burning_at = |neighbor: usize| grid.cells().get(neighbor).is_some_and(|c| c.is_burning());

    // Row above
    if !top_edge {
        let above = index - width;
        if burning_at(above) {
            return true;
        }
        if !left_edge && burning_at(above - 1) {
            return true;
        }
        if !right_edge && burning_at(above + 1) {
            return true;
        }
    }

    // Same row
    if !left_edge && burning_at(index - 1) {
        return true;
    }
    if !right_edge && burning_at(index + 1) {
        return true;
    }

    // Row below
    if !bottom_edge {
        let below = index + width;
        if burning_at(below) {
            return true;
        }
        if !left_edge && burning_at(below - 1) {
            return true;
        }
        if !right_edge && burning_at(below + 1) {
            return true;
        }
    }

    false
}
