//! Constant-product swap math with exact integer arithmetic
//!
//! Single-hop pricing primitives for x*y=k pools. All amounts are `U256`
//! and every intermediate operation is checked: overflow is rejected with a
//! typed error, never wrapped. Rounding direction is fixed per operation so
//! rounding loss always lands on the trader side and pool solvency is
//! preserved.

use ethereum_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::fee::{SwapFee, BPS_DENOMINATOR};

/// Pool reserves and fee for a single constant-product hop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub reserve_in: U256,
    pub reserve_out: U256,
    pub fee: SwapFee,
}

/// Constant-product math functions with exact integer results
pub struct V2Math;

impl V2Math {
    /// Proportional counterpart amount preserving the reserve ratio:
    /// `floor(amount_a * reserve_b / reserve_a)`.
    ///
    /// Used for balanced-liquidity conversion, not for trading - no fee is
    /// applied.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientInputAmount`] for a zero amount,
    /// [`AmmError::InsufficientLiquidity`] for a zero reserve,
    /// [`AmmError::Overflow`] if `amount_a * reserve_b` exceeds 256 bits.
    pub fn quote(amount_a: U256, reserve_a: U256, reserve_b: U256) -> Result<U256, AmmError> {
        if amount_a.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(AmmError::InsufficientLiquidity {
                reserve_in: reserve_a,
                reserve_out: reserve_b,
            });
        }
        let numerator = amount_a
            .checked_mul(reserve_b)
            .ok_or(AmmError::Overflow { op: "quote" })?;
        // reserve_a is non-zero after the liquidity check
        Ok(numerator / reserve_a)
    }

    /// Output amount for a given input, fee deducted from the input side:
    /// `floor((in * m * reserve_out) / (reserve_in * 10_000 + in * m))`
    /// where `m` is the fee multiplier in basis points.
    ///
    /// Rounds DOWN: the trader never receives more than the curve allows.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientInputAmount`] for a zero input,
    /// [`AmmError::InsufficientLiquidity`] for a zero reserve,
    /// [`AmmError::Overflow`] on 256-bit overflow of an intermediate value.
    pub fn get_amount_out(
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
        fee: SwapFee,
    ) -> Result<U256, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity {
                reserve_in,
                reserve_out,
            });
        }

        let amount_in_with_fee = amount_in
            .checked_mul(U256::from(fee.multiplier_bps()))
            .ok_or(AmmError::Overflow {
                op: "get_amount_out fee multiply",
            })?;
        let numerator =
            amount_in_with_fee
                .checked_mul(reserve_out)
                .ok_or(AmmError::Overflow {
                    op: "get_amount_out numerator",
                })?;
        let denominator = reserve_in
            .checked_mul(U256::from(BPS_DENOMINATOR))
            .and_then(|scaled| scaled.checked_add(amount_in_with_fee))
            .ok_or(AmmError::Overflow {
                op: "get_amount_out denominator",
            })?;

        // denominator >= reserve_in * 10_000 > 0
        Ok(numerator / denominator)
    }

    /// Required input for a desired output, inverse of [`Self::get_amount_out`]:
    /// `floor((reserve_in * out * 10_000) / ((reserve_out - out) * m)) + 1`.
    ///
    /// Rounds UP via the unconditional `+ 1` after floor division - also on
    /// exact division, where it over-charges by one unit. The round-trip
    /// reference values depend on this exact behavior.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientOutputAmount`] for a zero output,
    /// [`AmmError::InsufficientLiquidity`] for a zero reserve or when
    /// `amount_out >= reserve_out` (the subtraction is guarded, never allowed
    /// to underflow),
    /// [`AmmError::Overflow`] on 256-bit overflow of an intermediate value.
    pub fn get_amount_in(
        amount_out: U256,
        reserve_in: U256,
        reserve_out: U256,
        fee: SwapFee,
    ) -> Result<U256, AmmError> {
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity {
                reserve_in,
                reserve_out,
            });
        }

        let numerator = reserve_in
            .checked_mul(amount_out)
            .and_then(|v| v.checked_mul(U256::from(BPS_DENOMINATOR)))
            .ok_or(AmmError::Overflow {
                op: "get_amount_in numerator",
            })?;
        // amount_out < reserve_out after the liquidity check
        let denominator = (reserve_out - amount_out)
            .checked_mul(U256::from(fee.multiplier_bps()))
            .ok_or(AmmError::Overflow {
                op: "get_amount_in denominator",
            })?;

        (numerator / denominator)
            .checked_add(U256::one())
            .ok_or(AmmError::Overflow {
                op: "get_amount_in round-up",
            })
    }

    /// Shortfall of the realized output versus the infinite-liquidity
    /// (proportional) output, in basis points.
    ///
    /// A zero proportional output yields zero impact. Same validation errors
    /// as [`Self::get_amount_out`].
    pub fn price_impact_bps(
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
        fee: SwapFee,
    ) -> Result<u32, AmmError> {
        let ideal = Self::quote(amount_in, reserve_in, reserve_out)?;
        let actual = Self::get_amount_out(amount_in, reserve_in, reserve_out, fee)?;
        if ideal.is_zero() {
            return Ok(0);
        }
        // actual <= ideal: the fee-adjusted curve output never beats the
        // proportional price
        let shortfall = ideal.checked_sub(actual).ok_or(AmmError::Overflow {
            op: "price_impact_bps shortfall",
        })?;
        let impact = shortfall
            .checked_mul(U256::from(BPS_DENOMINATOR))
            .ok_or(AmmError::Overflow {
                op: "price_impact_bps scale",
            })?
            / ideal;
        // impact <= 10_000 because shortfall <= ideal
        Ok(impact.low_u64() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    const FEE: SwapFee = SwapFee::DEFAULT;

    // -- quote ------------------------------------------------------------

    #[test]
    fn quote_preserves_ratio() {
        // 100 * 2000 / 1000 = 200
        let out = V2Math::quote(u(100), u(1_000), u(2_000)).unwrap();
        assert_eq!(out, u(200));
    }

    #[test]
    fn quote_floors() {
        // 10 * 3 / 7 = 4.28... -> 4
        let out = V2Math::quote(u(10), u(7), u(3)).unwrap();
        assert_eq!(out, u(4));
    }

    #[test]
    fn quote_rejects_zero_amount() {
        assert_eq!(
            V2Math::quote(U256::zero(), u(1_000), u(2_000)),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn quote_rejects_empty_reserves() {
        for (ra, rb) in [(0u64, 2_000u64), (1_000, 0), (0, 0)] {
            let err = V2Math::quote(u(100), u(ra), u(rb)).unwrap_err();
            assert!(matches!(err, AmmError::InsufficientLiquidity { .. }));
        }
    }

    #[test]
    fn quote_rejects_overflow() {
        let err = V2Math::quote(U256::MAX, u(1), U256::MAX).unwrap_err();
        assert!(matches!(err, AmmError::Overflow { .. }));
    }

    // -- get_amount_out ---------------------------------------------------

    #[test]
    fn amount_out_reference_value() {
        // 1000 in against 1M/2M reserves at 0.3% -> 1992 out
        let out = V2Math::get_amount_out(u(1_000), u(1_000_000), u(2_000_000), FEE).unwrap();
        assert_eq!(out, u(1_992));
    }

    #[test]
    fn amount_out_small_trade() {
        // 997*2*100 / (100*1000 + 997*2) = 1.95 -> 1
        let out = V2Math::get_amount_out(u(2), u(100), u(100), FEE).unwrap();
        assert_eq!(out, u(1));
    }

    #[test]
    fn amount_out_stays_below_reserve() {
        // even an enormous trade cannot drain the output reserve
        let out = V2Math::get_amount_out(u(u64::MAX), u(1_000), u(5_000), FEE).unwrap();
        assert!(out < u(5_000));
    }

    #[test]
    fn amount_out_rejects_zero_input() {
        assert_eq!(
            V2Math::get_amount_out(U256::zero(), u(1_000), u(2_000), FEE),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn amount_out_rejects_empty_reserves() {
        for (ri, ro) in [(0u64, 2_000u64), (1_000, 0), (0, 0)] {
            let err = V2Math::get_amount_out(u(100), u(ri), u(ro), FEE).unwrap_err();
            assert!(matches!(err, AmmError::InsufficientLiquidity { .. }));
        }
    }

    #[test]
    fn amount_out_rejects_overflow() {
        let err = V2Math::get_amount_out(U256::MAX, u(1), u(1), FEE).unwrap_err();
        assert!(matches!(err, AmmError::Overflow { .. }));
    }

    #[test]
    fn amount_out_zero_fee_tracks_curve_exactly() {
        let fee0 = SwapFee::new(0).unwrap();
        // 100 * 2000 / (1000 + 100) = 181.8 -> 181
        let out = V2Math::get_amount_out(u(100), u(1_000), u(2_000), fee0).unwrap();
        assert_eq!(out, u(181));
    }

    // -- get_amount_in ----------------------------------------------------

    #[test]
    fn amount_in_reference_value() {
        // exact round trip of the reference forward swap
        let amount_in = V2Math::get_amount_in(u(1_992), u(1_000_000), u(2_000_000), FEE).unwrap();
        assert_eq!(amount_in, u(1_000));
    }

    #[test]
    fn amount_in_small_trade() {
        // 100*1*1000 / (99*997) = 1.01 -> 1, +1 = 2
        let amount_in = V2Math::get_amount_in(u(1), u(100), u(100), FEE).unwrap();
        assert_eq!(amount_in, u(2));
    }

    #[test]
    fn amount_in_adds_one_even_on_exact_division() {
        // zero fee, 500 out of 1000/1000: floor is exactly 1000, result 1001
        let fee0 = SwapFee::new(0).unwrap();
        let amount_in = V2Math::get_amount_in(u(500), u(1_000), u(1_000), fee0).unwrap();
        assert_eq!(amount_in, u(1_001));
    }

    #[test]
    fn amount_in_rejects_zero_output() {
        assert_eq!(
            V2Math::get_amount_in(U256::zero(), u(1_000), u(2_000), FEE),
            Err(AmmError::InsufficientOutputAmount)
        );
    }

    #[test]
    fn amount_in_rejects_empty_reserves() {
        for (ri, ro) in [(0u64, 2_000u64), (1_000, 0)] {
            let err = V2Math::get_amount_in(u(100), u(ri), u(ro), FEE).unwrap_err();
            assert!(matches!(err, AmmError::InsufficientLiquidity { .. }));
        }
    }

    #[test]
    fn amount_in_rejects_output_at_or_above_reserve() {
        for out in [2_000u64, 2_001, 10_000] {
            let err = V2Math::get_amount_in(u(out), u(1_000), u(2_000), FEE).unwrap_err();
            assert!(matches!(err, AmmError::InsufficientLiquidity { .. }));
        }
    }

    #[test]
    fn amount_in_rejects_overflow() {
        let err =
            V2Math::get_amount_in(U256::MAX - U256::one(), U256::MAX, U256::MAX, FEE).unwrap_err();
        assert!(matches!(err, AmmError::Overflow { .. }));
    }

    // -- price impact -----------------------------------------------------

    #[test]
    fn price_impact_grows_with_trade_size() {
        let small = V2Math::price_impact_bps(u(1_000), u(1_000_000), u(2_000_000), FEE).unwrap();
        let large = V2Math::price_impact_bps(u(100_000), u(1_000_000), u(2_000_000), FEE).unwrap();
        assert!(small < large);
        assert!(large <= 10_000);
    }

    #[test]
    fn price_impact_includes_fee() {
        // even a tiny trade pays the 30 bps fee
        let impact = V2Math::price_impact_bps(u(1_000), u(1_000_000), u(2_000_000), FEE).unwrap();
        assert!(impact >= 30);
    }
}
