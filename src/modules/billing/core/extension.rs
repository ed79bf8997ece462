// Extension calculator: overage beyond the course, in whole blocks.
//
// Responsibilities
// - Reject an exit before the entry.
// - Compute the overage past the course's base duration.
// - Round any positive overage, down to a single nanosecond, up to the next whole block.
// - Refuse a visit whose course or extension would end past the representable date range.
// - Never perform input or output.

use crate::modules::billing::core::course::CourseDefinition;
use crate::modules::billing::core::errors::BillingError;
use crate::modules::billing::core::night_window::NightWindow;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::core::surcharge::ExtensionBlocks;
use chrono::{DateTime, FixedOffset, TimeDelta};

/// Billable overage: `block_count` consecutive blocks starting when the course ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionPeriod {
    pub starts_at: DateTime<FixedOffset>,
    pub block_length: TimeDelta,
    pub block_count: u64,
}

impl ExtensionPeriod {
    pub fn duration(&self) -> TimeDelta {
        let block_ms = self.block_length.num_milliseconds();
        let count = i64::try_from(self.block_count).unwrap_or(i64::MAX);
        TimeDelta::try_milliseconds(block_ms.saturating_mul(count)).unwrap_or(TimeDelta::MAX)
    }

    /// Start of the block at `index`, or `None` when it lies outside chrono's range.
    pub fn block_start(&self, index: u64) -> Option<DateTime<FixedOffset>> {
        let offset_ms = self
            .block_length
            .num_milliseconds()
            .checked_mul(i64::try_from(index).ok()?)?;
        self.starts_at
            .checked_add_signed(TimeDelta::try_milliseconds(offset_ms)?)
    }

    pub fn ends_at(&self) -> Option<DateTime<FixedOffset>> {
        self.block_start(self.block_count)
    }

    pub fn minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// Walks the period block by block, flagging blocks that touch `night_window`
    /// before `exited_at`.
    pub fn blocks(
        &self,
        exited_at: DateTime<FixedOffset>,
        night_window: NightWindow,
    ) -> ExtensionBlocks {
        ExtensionBlocks::new(*self, exited_at, night_window)
    }

    /// Same walk as [`ExtensionPeriod::blocks`], skipping straight to block `index`.
    pub fn blocks_from(
        &self,
        index: u64,
        exited_at: DateTime<FixedOffset>,
        night_window: NightWindow,
    ) -> ExtensionBlocks {
        ExtensionBlocks::starting_at(*self, index, exited_at, night_window)
    }
}

pub(crate) fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos())
}

pub fn calculate_extension(
    entered_at: DateTime<FixedOffset>,
    exited_at: DateTime<FixedOffset>,
    course: &CourseDefinition,
    policy: &PricingPolicy,
) -> Result<ExtensionPeriod, BillingError> {
    if exited_at < entered_at {
        return Err(BillingError::ExitBeforeEntry);
    }
    let starts_at = entered_at
        .checked_add_signed(course.base_duration())
        .ok_or(BillingError::OutOfRange)?;
    let overage = total_nanos(exited_at.signed_duration_since(starts_at));
    let block = total_nanos(policy.block_length);

    let block_count = if overage > 0 {
        // Bounded by the chrono range divided by a block, well inside u64.
        u64::try_from((overage + block - 1) / block).unwrap_or(u64::MAX)
    } else {
        0
    };

    let period = ExtensionPeriod {
        starts_at,
        block_length: policy.block_length,
        block_count,
    };
    // Every block boundary must be representable so the walk never overflows.
    period.ends_at().ok_or(BillingError::OutOfRange)?;
    Ok(period)
}
