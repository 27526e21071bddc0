//! # Quoter AMM Library - Exact Constant-Product Pricing Engine
//!
//! ## Purpose
//!
//! Deterministic swap-pricing amounts for constant-product (x*y=k) pools,
//! chained across multi-hop trading paths. Provides the fee-adjusted swap
//! formulas with exact integer results - no floating point anywhere - and a
//! path pricer that propagates intermediate amounts hop to hop. Rounding
//! direction is fixed per operation so rounding loss always favors the pool
//! and no value can be extracted through quantization.
//!
//! ## Integration Points
//!
//! - **Input Sources**: per-hop reserves from a caller-supplied
//!   [`ReserveSource`] implementation (RPC client, cached pool state, test
//!   fixture)
//! - **Output Destinations**: router layers deciding trade execution, quote
//!   endpoints, per-hop slippage analysis
//! - **Precision**: `U256` amounts with checked arithmetic; overflow is a
//!   typed error, never a silent wrap
//!
//! ## Architecture Role
//!
//! This crate is the mathematical foundation under a swap router: it holds
//! no balances, performs no I/O of its own, and decides nothing about which
//! path to trade. Every operation is a pure function over immutable inputs
//! and is safe to call concurrently across unrelated invocations.

pub mod error;
pub mod fee;
pub mod path;
pub mod pool_traits;
pub mod v2_math;

pub use error::AmmError;
pub use fee::{SwapFee, BPS_DENOMINATOR};
pub use path::{PathPricer, ReserveSource};
pub use pool_traits::AmmPool;
pub use v2_math::{PoolState, V2Math};

/// Common external types for AMM calculations
pub use ethereum_types::{Address, U256};
