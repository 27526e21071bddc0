//! Pool trait definitions for a unified pricing interface

use ethereum_types::U256;

use crate::error::AmmError;
use crate::fee::SwapFee;
use crate::v2_math::{PoolState, V2Math};

/// Unified pool interface for pricing calculations
pub trait AmmPool {
    /// Calculate output amount for given input
    fn get_amount_out(&self, amount_in: U256) -> Result<U256, AmmError>;

    /// Calculate required input for desired output
    fn get_amount_in(&self, amount_out: U256) -> Result<U256, AmmError>;

    /// Current reserves, ordered (in, out)
    fn reserves(&self) -> (U256, U256);

    /// Pool fee
    fn fee(&self) -> SwapFee;
}

impl AmmPool for PoolState {
    fn get_amount_out(&self, amount_in: U256) -> Result<U256, AmmError> {
        V2Math::get_amount_out(amount_in, self.reserve_in, self.reserve_out, self.fee)
    }

    fn get_amount_in(&self, amount_out: U256) -> Result<U256, AmmError> {
        V2Math::get_amount_in(amount_out, self.reserve_in, self.reserve_out, self.fee)
    }

    fn reserves(&self) -> (U256, U256) {
        (self.reserve_in, self.reserve_out)
    }

    fn fee(&self) -> SwapFee {
        self.fee
    }
}
