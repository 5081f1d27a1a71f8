use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Errors raised by the papr math routines.
///
/// Every routine that can divide by zero, overflow or leave the domain of a
/// transcendental function reports it here instead of producing `NaN` or `Infinity`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaprMathError {
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("seconds in period must be greater than zero")]
    ZeroSecondsInPeriod,

    #[error("per period decay percent must be below one wad, got {0}")]
    DecayPercentOutOfRange(U256),

    #[error("timestamp {timestamp} is before the auction start {start_timestamp}")]
    TimestampBeforeAuctionStart {
        timestamp: u64,
        start_timestamp: u64,
    },

    #[error("decimals must be at most 18, got {0}")]
    InvalidDecimals(u8),

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    #[error("no oracle price for collateral {0}")]
    MissingOraclePrice(Address),

    #[error("lambert W is undefined for {0}")]
    LambertWDomain(f64),

    #[error("{0} is not computable for the given inputs")]
    NotComputable(&'static str),
}

pub type Result<T> = std::result::Result<T, PaprMathError>;
