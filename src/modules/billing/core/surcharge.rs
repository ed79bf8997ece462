// Night surcharge aggregator: prices every extension block and sums the fees.
//
// Responsibilities
// - Walk the extension period one block at a time.
// - Flag a block as night when the time actually spent in it touches the night window.
// - Price night blocks at the night rate and the rest at the standard rate.
//
// Notes
// - The last block may end after the exit; it is billed in full, but only the part
//   before the exit is checked against the window.
// - Fully occupied blocks repeat their night pattern every 24 hours, so a long visit is
//   counted per day cycle and only one day plus the last block is ever walked.

use crate::modules::billing::core::extension::{ExtensionPeriod, total_nanos};
use crate::modules::billing::core::night_window::NightWindow;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::shared::core::primitives::Amount;
use chrono::{DateTime, FixedOffset, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionBlock {
    pub index: u64,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
    pub is_night: bool,
}

/// Lazy walk over the blocks of an [`ExtensionPeriod`].
#[derive(Debug, Clone)]
pub struct ExtensionBlocks {
    cursor: DateTime<FixedOffset>,
    block_length: TimeDelta,
    next_index: u64,
    block_count: u64,
    exited_at: DateTime<FixedOffset>,
    night_window: NightWindow,
}

impl ExtensionBlocks {
    pub fn new(
        period: ExtensionPeriod,
        exited_at: DateTime<FixedOffset>,
        night_window: NightWindow,
    ) -> Self {
        Self::starting_at(period, 0, exited_at, night_window)
    }

    pub fn starting_at(
        period: ExtensionPeriod,
        index: u64,
        exited_at: DateTime<FixedOffset>,
        night_window: NightWindow,
    ) -> Self {
        let cursor = period.block_start(index);
        Self {
            cursor: cursor.unwrap_or(period.starts_at),
            block_length: period.block_length,
            // An unrepresentable start leaves nothing to walk.
            next_index: if cursor.is_some() { index } else { period.block_count },
            block_count: period.block_count,
            exited_at,
            night_window,
        }
    }
}

impl Iterator for ExtensionBlocks {
    type Item = ExtensionBlock;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.block_count {
            return None;
        }
        let starts_at = self.cursor;
        let Some(ends_at) = starts_at.checked_add_signed(self.block_length) else {
            self.next_index = self.block_count;
            return None;
        };
        let occupied_until = ends_at.min(self.exited_at);
        let block = ExtensionBlock {
            index: self.next_index,
            starts_at,
            ends_at,
            is_night: self.night_window.overlaps(starts_at, occupied_until),
        };
        self.cursor = ends_at;
        self.next_index += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.block_count.saturating_sub(self.next_index)).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Priced extension: how many blocks fell on each rate and what they cost together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionCharge {
    pub night_blocks: u64,
    pub standard_blocks: u64,
    pub fee_total: Amount,
}

impl ExtensionCharge {
    pub fn block_count(&self) -> u64 {
        self.night_blocks + self.standard_blocks
    }
}

/// Number of blocks in 24 hours, when a day splits into whole blocks.
fn blocks_per_day(block_length: TimeDelta) -> Option<u64> {
    let day = total_nanos(TimeDelta::days(1));
    let block = total_nanos(block_length);
    if block <= 0 || day % block != 0 {
        return None;
    }
    u64::try_from(day / block).ok()
}

/// Night blocks of a period longer than a day.
///
/// Every block but the last is fully occupied, and the wall clock of block `i` equals
/// that of block `i + per_day`, so the first day's flags decide all of them.
fn count_night_blocks_by_day(
    period: &ExtensionPeriod,
    exited_at: DateTime<FixedOffset>,
    night_window: NightWindow,
    per_day: u64,
) -> u64 {
    let day: Vec<bool> = period
        .blocks(exited_at, night_window)
        .take(usize::try_from(per_day).unwrap_or(usize::MAX))
        .map(|block| block.is_night)
        .collect();
    let count = |flags: &[bool]| flags.iter().filter(|is_night| **is_night).count() as u64;

    let last = period.block_count - 1;
    let remainder = usize::try_from(last % per_day).map_or(day.len(), |r| r.min(day.len()));
    let last_is_night = period
        .blocks_from(last, exited_at, night_window)
        .next()
        .is_some_and(|block| block.is_night);

    (last / per_day) * count(&day[..]) + count(&day[..remainder]) + u64::from(last_is_night)
}

pub fn aggregate_night_surcharge(
    period: &ExtensionPeriod,
    exited_at: DateTime<FixedOffset>,
    policy: &PricingPolicy,
) -> ExtensionCharge {
    let night_blocks = match blocks_per_day(policy.block_length) {
        Some(per_day) if period.block_count > per_day => {
            count_night_blocks_by_day(period, exited_at, policy.night_window, per_day)
        }
        _ => period
            .blocks(exited_at, policy.night_window)
            .filter(|block| block.is_night)
            .count() as u64,
    };
    let standard_blocks = period.block_count - night_blocks;
    ExtensionCharge {
        night_blocks,
        standard_blocks,
        fee_total: night_blocks
            .saturating_mul(policy.block_rate(true))
            .saturating_add(standard_blocks.saturating_mul(policy.block_rate(false))),
    }
}
