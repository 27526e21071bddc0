//! Swap fee expressed in basis points
//!
//! The protocol fee is a single definition point ([`SwapFee::DEFAULT`],
//! 30 bps = 0.3%) so the swap formulas never repeat magic literals. For the
//! default fee the multiplier `(10_000 - 30) / 10_000` is exactly the
//! canonical 997/1000 factor: numerator and denominator scale by ten, so
//! every floor-division result is bit-identical to the 997/1000 form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Denominator for basis-point fee math (10_000 = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Pool fee in basis points (30 = 0.3%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapFee {
    bps: u32,
}

impl SwapFee {
    /// Protocol default fee: 30 bps (0.3%).
    pub const DEFAULT: Self = Self { bps: 30 };

    /// Creates a fee from basis points.
    ///
    /// Returns `None` if the fee would consume the entire input
    /// (`bps >= 10_000`), which makes the swap formulas degenerate.
    pub const fn new(bps: u32) -> Option<Self> {
        if bps >= BPS_DENOMINATOR {
            None
        } else {
            Some(Self { bps })
        }
    }

    /// The fee in basis points.
    pub const fn bps(&self) -> u32 {
        self.bps
    }

    /// Fraction of the input that reaches the curve after the fee is
    /// deducted, in basis points (9_970 for the default fee).
    pub const fn multiplier_bps(&self) -> u32 {
        BPS_DENOMINATOR - self.bps
    }
}

impl Default for SwapFee {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SwapFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.bps)
    }
}
