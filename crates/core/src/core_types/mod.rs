//! Core types and configuration

pub mod cell;
pub mod config;
pub mod constants;

pub use cell::CellState;
pub use config::SimulationConfig;
pub use constants::*;
