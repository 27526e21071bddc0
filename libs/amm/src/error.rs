//! Pricing errors for the quoting engine
//!
//! Every fallible operation in this crate returns [`AmmError`]. Variants
//! carry the values that failed validation so callers can log actionable
//! context without re-deriving pool state.

use ethereum_types::{Address, U256};
use thiserror::Error;

/// Validation and arithmetic failures raised by the pricing primitives.
///
/// All variants are synchronous validation failures. Nothing is retried
/// internally and no partial results are produced; the router layer decides
/// whether to retry with different parameters, fall back to another path, or
/// surface the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// Input amount is zero where a strictly positive amount is required
    #[error("Insufficient input amount: input must be greater than zero")]
    InsufficientInputAmount,

    /// Requested output amount is zero
    #[error("Insufficient output amount: requested output must be greater than zero")]
    InsufficientOutputAmount,

    /// A reserve is zero, or a requested output meets/exceeds the available reserve
    #[error("Insufficient liquidity: reserves {reserve_in} / {reserve_out}")]
    InsufficientLiquidity {
        reserve_in: U256,
        reserve_out: U256,
    },

    /// Path has fewer than the two tokens a single hop requires
    #[error("Invalid path: need at least 2 tokens, got {len}")]
    InvalidPath { len: usize },

    /// An intermediate product or sum exceeded the 256-bit range
    #[error("Arithmetic overflow in {op}: operands exceed the 256-bit range")]
    Overflow { op: &'static str },

    /// The reserve source could not resolve a token pair to a pool
    #[error("Unknown pool for pair {token_in} / {token_out}")]
    UnknownPool {
        token_in: Address,
        token_out: Address,
    },
}
