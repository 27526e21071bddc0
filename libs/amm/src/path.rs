//! Multi-hop path pricing
//!
//! Chains the single-hop primitives across an ordered token path, pulling
//! each hop's reserves from a caller-supplied [`ReserveSource`]. Both
//! directions return the full per-hop amount sequence so callers can
//! evaluate slippage at every position, and any hop failure aborts the
//! whole traversal with no partial result.

use ethereum_types::{Address, U256};
use tracing::debug;

use crate::error::AmmError;
use crate::fee::SwapFee;
use crate::v2_math::V2Math;

/// Reserve lookup collaborator.
///
/// Resolves a token pair to the pool reserves backing it, ordered to match
/// the argument order (`token_in` reserve first). Canonical pair ordering is
/// the implementor's concern; the pricer never reorders identifiers.
///
/// The call is synchronous from the pricer's perspective: the traversal
/// cannot proceed past an unresolved hop, so implementations that perform
/// network or ledger I/O block here.
pub trait ReserveSource {
    /// Current reserves for the pool holding `(token_in, token_out)`.
    fn get_reserves(&self, token_in: Address, token_out: Address)
        -> Result<(U256, U256), AmmError>;
}

impl<S: ReserveSource + ?Sized> ReserveSource for &S {
    fn get_reserves(
        &self,
        token_in: Address,
        token_out: Address,
    ) -> Result<(U256, U256), AmmError> {
        (**self).get_reserves(token_in, token_out)
    }
}

/// Prices trades along multi-hop token paths.
///
/// Stateless apart from the fee applied at every hop; safe to share and to
/// call concurrently across unrelated invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPricer {
    fee: SwapFee,
}

impl PathPricer {
    pub fn new(fee: SwapFee) -> Self {
        Self { fee }
    }

    pub fn fee(&self) -> SwapFee {
        self.fee
    }

    /// Amounts received along `path` when swapping `amount_in` of the first
    /// token: `amounts[0] = amount_in`, each hop's output is the next hop's
    /// input, `amounts[last]` is the final output.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidPath`] for paths shorter than two tokens;
    /// otherwise whatever the reserve lookup or
    /// [`V2Math::get_amount_out`] fails with on any hop.
    pub fn get_amounts_out<S: ReserveSource>(
        &self,
        source: &S,
        amount_in: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, AmmError> {
        if path.len() < 2 {
            return Err(AmmError::InvalidPath { len: path.len() });
        }

        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        for (hop, pair) in path.windows(2).enumerate() {
            let (reserve_in, reserve_out) = source.get_reserves(pair[0], pair[1])?;
            let amount_out =
                V2Math::get_amount_out(amounts[hop], reserve_in, reserve_out, self.fee)?;
            debug!(
                hop,
                amount_in = %amounts[hop],
                amount_out = %amount_out,
                "priced forward hop"
            );
            amounts.push(amount_out);
        }
        Ok(amounts)
    }

    /// Amounts required along `path` to receive `amount_out` of the last
    /// token: `amounts[last] = amount_out`, walking the path backwards,
    /// `amounts[0]` is the input the trader must supply.
    ///
    /// The returned sequence is ordered like the path (index 0 = first
    /// token) regardless of the backward construction.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidPath`] for paths shorter than two tokens;
    /// otherwise whatever the reserve lookup or
    /// [`V2Math::get_amount_in`] fails with on any hop.
    pub fn get_amounts_in<S: ReserveSource>(
        &self,
        source: &S,
        amount_out: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, AmmError> {
        if path.len() < 2 {
            return Err(AmmError::InvalidPath { len: path.len() });
        }

        // Accumulate tail-to-head, then flip once so index 0 lines up with
        // the path's first token.
        let mut reversed = Vec::with_capacity(path.len());
        let mut current = amount_out;
        reversed.push(current);
        for (hop, pair) in path.windows(2).enumerate().rev() {
            let (reserve_in, reserve_out) = source.get_reserves(pair[0], pair[1])?;
            current = V2Math::get_amount_in(current, reserve_in, reserve_out, self.fee)?;
            debug!(hop, amount_in = %current, "priced backward hop");
            reversed.push(current);
        }
        reversed.reverse();
        Ok(reversed)
    }
}

impl Default for PathPricer {
    fn default() -> Self {
        Self::new(SwapFee::DEFAULT)
    }
}
