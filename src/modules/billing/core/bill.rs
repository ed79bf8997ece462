// Bill for one visit, derived once and never mutated.
//
// Purpose
// - Compose the extension calculator and the night surcharge aggregator over a resolved course.
// - Expose the totals a presentation layer needs, before and after tax.
//
// Boundaries
// - No rendering here. Callers format the numbers themselves.

use crate::modules::billing::core::course::CourseDefinition;
use crate::modules::billing::core::errors::BillingError;
use crate::modules::billing::core::extension::{ExtensionPeriod, calculate_extension};
use crate::modules::billing::core::night_window::NightWindow;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::core::surcharge::{
    ExtensionBlocks, ExtensionCharge, aggregate_night_surcharge,
};
use crate::shared::core::primitives::{Amount, TaxRate};
use chrono::{DateTime, FixedOffset, TimeDelta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    course: CourseDefinition,
    entered_at: DateTime<FixedOffset>,
    exited_at: DateTime<FixedOffset>,
    extension: ExtensionPeriod,
    charge: ExtensionCharge,
    night_window: NightWindow,
}

impl Bill {
    pub fn new(
        course: CourseDefinition,
        entered_at: DateTime<FixedOffset>,
        exited_at: DateTime<FixedOffset>,
        policy: &PricingPolicy,
    ) -> Result<Self, BillingError> {
        let extension = calculate_extension(entered_at, exited_at, &course, policy)?;
        let charge = aggregate_night_surcharge(&extension, exited_at, policy);
        Ok(Self {
            course,
            entered_at,
            exited_at,
            extension,
            charge,
            night_window: policy.night_window,
        })
    }

    pub fn course(&self) -> &CourseDefinition {
        &self.course
    }

    pub fn entered_at(&self) -> DateTime<FixedOffset> {
        self.entered_at
    }

    pub fn exited_at(&self) -> DateTime<FixedOffset> {
        self.exited_at
    }

    pub fn course_fee(&self) -> Amount {
        self.course.base_fee
    }

    pub fn extension_fee_total(&self) -> Amount {
        self.charge.fee_total
    }

    pub fn total_pre_tax(&self) -> Amount {
        self.course_fee() + self.extension_fee_total()
    }

    /// Pre-tax total inflated by `rate`, fraction truncated.
    pub fn total_with_tax(&self, rate: TaxRate) -> Amount {
        rate.apply(self.total_pre_tax())
    }

    /// Raw time between entry and exit, not rounded.
    pub fn duration_at_facility(&self) -> TimeDelta {
        self.exited_at.signed_duration_since(self.entered_at)
    }

    pub fn extension(&self) -> &ExtensionPeriod {
        &self.extension
    }

    pub fn extension_block_count(&self) -> u64 {
        self.extension.block_count
    }

    pub fn extension_minutes(&self) -> i64 {
        self.extension.minutes()
    }

    pub fn night_block_count(&self) -> u64 {
        self.charge.night_blocks
    }

    pub fn standard_block_count(&self) -> u64 {
        self.charge.standard_blocks
    }

    pub fn blocks(&self) -> ExtensionBlocks {
        self.extension.blocks(self.exited_at, self.night_window)
    }
}
