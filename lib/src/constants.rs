//! This module contains constants used throughout the project.

/// Number of decimals of a one-scaled (wad) value
pub const WAD_DECIMALS: u8 = 18;

/// One unit in wad fixed-point representation
pub const WAD: u128 = 1_000_000_000_000_000_000; // 1e18

/// Decimal digits the auction decay multiplier is quantized to before touching integer math
pub const MULTIPLIER_DECIMALS: u8 = 10;

/// Added to every auction price so it never lands exactly on a threshold used for "infinite" price checks
pub const PRICE_PADDING: u64 = 1_000_000_000; // 1e-9 of an 18 decimals token

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Length of a papr funding period in seconds
pub const FUNDING_PERIOD: u64 = 28 * SECONDS_PER_DAY;

/// Assumed ratio between the index and mark prices of papr
pub const DEFAULT_INDEX_MARK_RATIO: f64 = 1.4;

/// Assumed target growth per funding period
pub const DEFAULT_TARGET_GROWTH_PER_PERIOD: f64 = 1.0;

/// Decimal digits kept when reading the max LTV wad for display
pub const MAX_LTV_DISPLAY_DECIMALS: u8 = 4;

/// Spacing between two points of an auction price chart, in seconds
pub const CHART_SAMPLE_INTERVAL: u64 = 900; // 15 minutes

/// Time window covered by an auction price chart, in seconds
pub const CHART_WINDOW: u64 = 3 * SECONDS_PER_DAY;
