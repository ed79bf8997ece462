// Request to bill one visit.
//
// Purpose
// - Carry the course picked on entry and the entry and exit instants.
//
// Responsibilities
// - Be independent of transport details (not tied to HTTP or GraphQL).
// - Keep the UTC offset of each instant; night pricing reads the local wall clock.

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingRequest {
    pub course: String,
    pub entered_at: DateTime<FixedOffset>,
    pub exited_at: DateTime<FixedOffset>,
}
