//! Default configuration constants and bounds

/// Default forest width in cells.
pub const DEFAULT_FOREST_WIDTH: usize = 75;

/// Default forest height in cells.
pub const DEFAULT_FOREST_HEIGHT: usize = 75;

/// Default regrowth/lightning probability (percent).
pub const DEFAULT_PROBABILITY: u8 = 0;

/// Probability value meaning "never fires".
pub const ZERO_PERCENT_PROBABILITY: u8 = 0;

/// Probability value meaning "always fires".
pub const ONE_HUNDRED_PERCENT_PROBABILITY: u8 = 100;

/// Lower bound of the uniform draw for intermediate probabilities.
pub const MINIMUM_PROBABILITY: u8 = 1;

/// Upper bound (exclusive in the draw) for intermediate probabilities.
pub const MAXIMUM_PROBABILITY: u8 = 100;

/// Shortest step interval the engine accepts (milliseconds).
pub const MINIMUM_STEP_INTERVAL_MS: u64 = 100;

/// Default step interval (milliseconds).
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 1000;

/// Longest step interval the engine accepts (milliseconds).
pub const MAXIMUM_STEP_INTERVAL_MS: u64 = 5000;
