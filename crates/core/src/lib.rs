//! Forest Fire Simulation Core Library
//!
//! A probabilistic forest-fire cellular automaton on a fixed-size grid.
//! Empty cells may regrow a tree, trees catch fire from burning neighbors or
//! random lightning strikes, and burning cells burn out in a single step.
//! Each simulation step computes a complete next grid from the current one
//! and swaps it in atomically, so readers never observe a half-updated
//! forest.
//!
//! The engine performs no scheduling of its own: it exposes a running flag
//! and a step-interval hint, and an external scheduler (see the
//! `demo-headless` crate) calls `tick()` at that cadence.

// Core types and configuration
pub mod core_types;

// Grid storage and pointer mapping
pub mod grid;

// The simulation engine
pub mod simulation;

// Re-export core types
pub use core_types::{CellState, SimulationConfig};

// Re-export grid surface
pub use grid::{point_to_index, ForestGrid, GridError};

// Re-export engine surface
pub use simulation::{ForestSimulation, ForestStats, SimulationEvent};
