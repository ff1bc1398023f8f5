/// Upper bound of every risk sub-score
pub const SCORE_MAX: u32 = 100;

/// Sub-score weights in percent; they sum to `SCORE_DENOMINATOR`
pub const WEIGHT_TRANSPARENCY: u32 = 25;
pub const WEIGHT_TRACK_RECORD: u32 = 25;
pub const WEIGHT_ASSET_BACKING: u32 = 20;
pub const WEIGHT_SMART_CONTRACT: u32 = 15;
pub const WEIGHT_LIQUIDITY: u32 = 15;

pub const SCORE_DENOMINATOR: u32 = 100;

/// Largest catalog the bounded full-dump reads will return
pub const DEFAULT_DUMP_LIMIT: u32 = 100;

/// Width of the big-endian chain id field in the identity preimage
pub const CHAIN_ID_WIDTH: usize = 32;
