// Value types shared by every billing slice.
//
// Notes
// - Money is always whole currency units. No floating point anywhere in pricing.
// - Rates are whole percentages so every multiplication stays exact.

use serde::{Deserialize, Serialize};

/// Non-negative amount of money in the smallest currency unit.
pub type Amount = u64;

/// Sales tax as a whole percentage of the pre-tax amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Highest rate configuration accepts.
    pub const MAX_PERCENT: u32 = 100;

    pub const fn percent(percent: u32) -> Self {
        Self(percent)
    }

    pub fn as_percent(&self) -> u32 {
        self.0
    }

    /// Inflates `amount` by the rate and truncates any fraction, saturating at `Amount::MAX`.
    pub fn apply(&self, amount: Amount) -> Amount {
        let taxed = u128::from(amount) * (100 + u128::from(self.0)) / 100;
        Amount::try_from(taxed).unwrap_or(Amount::MAX)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::percent(10)
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
