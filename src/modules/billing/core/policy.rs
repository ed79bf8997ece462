// Pricing constants for extension time.

use crate::modules::billing::core::night_window::NightWindow;
use crate::shared::core::primitives::Amount;
use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Length of one extension block. Any started block is billed in full.
    pub block_length: TimeDelta,
    /// Price of a block outside the night window.
    pub standard_rate: Amount,
    /// Surcharge on `standard_rate` for a block touching the night window.
    pub night_surcharge_percent: u32,
    pub night_window: NightWindow,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            block_length: TimeDelta::minutes(10),
            standard_rate: 100,
            night_surcharge_percent: 15,
            night_window: NightWindow::default(),
        }
    }
}

impl PricingPolicy {
    /// Night price of a block, rounded up so the surcharge is never undercharged.
    pub fn night_rate(&self) -> Amount {
        (self.standard_rate * (100 + u64::from(self.night_surcharge_percent))).div_ceil(100)
    }

    pub fn block_rate(&self, is_night: bool) -> Amount {
        if is_night {
            self.night_rate()
        } else {
            self.standard_rate
        }
    }
}
