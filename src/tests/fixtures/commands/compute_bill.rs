// Shared test fixture for the BillingRequest command.
// Compiled into the crate only during tests, exposed under `crate::tests::fixtures`.

use crate::modules::billing::use_cases::compute_bill::command::BillingRequest;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct BillingRequestDto {
    pub course: String,
    pub entered_at: DateTime<FixedOffset>,
    pub exited_at: DateTime<FixedOffset>,
}

pub struct BillingRequestBuilder {
    inner: BillingRequest,
}

impl Default for BillingRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn instant(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

#[allow(dead_code)]
impl BillingRequestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/compute_bill.json").unwrap();
        let dto: BillingRequestDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: BillingRequest {
                course: dto.course,
                entered_at: dto.entered_at,
                exited_at: dto.exited_at,
            },
        }
    }

    pub fn course(mut self, v: impl Into<String>) -> Self {
        self.inner.course = v.into();
        self
    }

    pub fn entered_at(mut self, rfc3339: &str) -> Self {
        self.inner.entered_at = instant(rfc3339);
        self
    }

    pub fn exited_at(mut self, rfc3339: &str) -> Self {
        self.inner.exited_at = instant(rfc3339);
        self
    }

    pub fn build(self) -> BillingRequest {
        self.inner
    }
}

#[cfg(test)]
mod billing_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = BillingRequestBuilder::default().build();
        assert_eq!(built.course, "standard");
        assert_eq!(built.entered_at, instant("2021-07-17T10:10:30+09:00"));
        assert_eq!(built.exited_at, instant("2021-07-17T11:10:31+09:00"));
        assert_eq!(built.entered_at.offset().local_minus_utc(), 9 * 3600);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = BillingRequestBuilder::new()
            .course("5-hour pack")
            .entered_at("2021-07-17T23:00:00+09:00")
            .exited_at("2021-07-18T07:20:01+09:00")
            .build();

        assert_eq!(custom.course, "5-hour pack");
        assert_eq!(custom.entered_at, instant("2021-07-17T23:00:00+09:00"));
        assert_eq!(custom.exited_at, instant("2021-07-18T07:20:01+09:00"));
    }
}
