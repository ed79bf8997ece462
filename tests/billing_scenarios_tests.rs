// End to end billing scenarios through the public crate API.
//
// Responsibilities
// - Drive the compute function with the static catalog and default policy.
// - Assert totals for reference visits and the block rounding and night rules.

use chrono::{DateTime, FixedOffset, TimeDelta};
use lounge_billing::modules::billing::adapters::outbound::static_catalog::StaticCourseCatalog;
use lounge_billing::modules::billing::core::bill::Bill;
use lounge_billing::modules::billing::core::errors::BillingError;
use lounge_billing::modules::billing::core::policy::PricingPolicy;
use lounge_billing::modules::billing::use_cases::compute_bill::command::BillingRequest;
use lounge_billing::modules::billing::use_cases::compute_bill::compute::compute_bill;
use lounge_billing::shared::core::primitives::TaxRate;
use rstest::rstest;

fn instant(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn bill(course: &str, entered_at: DateTime<FixedOffset>, exited_at: DateTime<FixedOffset>) -> Bill {
    let request = BillingRequest {
        course: course.to_string(),
        entered_at,
        exited_at,
    };
    compute_bill(&StaticCourseCatalog::new(), &request, &PricingPolicy::default())
        .expect("bill should compute")
}

#[rstest]
#[case::one_second_over_the_standard_course(
    "standard", "2021-07-17T10:10:30+09:00", "2021-07-17T11:10:31+09:00", 1, 100, 600, 660
)]
#[case::daytime_overage_on_the_five_hour_pack(
    "5-hour pack", "2021-07-17T10:00:28+09:00", "2021-07-17T17:21:28+09:00", 15, 1500, 3000, 3300
)]
#[case::overnight_on_the_five_hour_pack(
    "5-hour pack", "2021-07-17T23:00:00+09:00", "2021-07-18T07:20:01+09:00", 21, 2190, 3690, 4059
)]
#[case::all_night_overage_on_the_three_hour_pack(
    "3-hour pack", "2021-07-17T20:00:00+09:00", "2021-07-18T01:20:01+09:00", 15, 1725, 2525, 2777
)]
#[case::exactly_the_eight_hour_pack(
    "8-hour pack", "2021-07-17T09:00:00+09:00", "2021-07-17T17:00:00+09:00", 0, 0, 1900, 2090
)]
fn it_should_bill_the_reference_visits(
    #[case] course: &str,
    #[case] entered_at: &str,
    #[case] exited_at: &str,
    #[case] blocks: u64,
    #[case] extension_fee: u64,
    #[case] pre_tax: u64,
    #[case] with_tax: u64,
) {
    let bill = bill(course, instant(entered_at), instant(exited_at));
    assert_eq!(bill.extension_block_count(), blocks);
    assert_eq!(bill.extension_fee_total(), extension_fee);
    assert_eq!(bill.total_pre_tax(), pre_tax);
    assert_eq!(bill.total_with_tax(TaxRate::default()), with_tax);
}

#[rstest]
#[case("standard", 1)]
#[case("3-hour pack", 3)]
#[case("5-hour pack", 5)]
#[case("8-hour pack", 8)]
fn it_should_charge_no_extension_at_exactly_the_course_length(
    #[case] course: &str,
    #[case] hours: i64,
) {
    let entered_at = instant("2021-07-17T12:00:00+09:00");
    let bill = bill(course, entered_at, entered_at + TimeDelta::hours(hours));
    assert_eq!(bill.extension_fee_total(), 0);
    assert_eq!(bill.total_pre_tax(), bill.course_fee());
}

#[rstest]
#[case("2021-07-17T12:00:00+09:00", 100)]
#[case("2021-07-17T21:00:00+09:00", 115)]
#[case("2021-07-18T03:00:00+09:00", 115)]
#[case("2021-07-18T04:00:00+09:00", 100)]
fn it_should_bill_one_full_block_for_one_second_over(
    #[case] entered_at: &str,
    #[case] expected_fee: u64,
) {
    // Standard course: the extension starts an hour after entry.
    let entered_at = instant(entered_at);
    let exited_at = entered_at + TimeDelta::hours(1) + TimeDelta::seconds(1);
    let bill = bill("standard", entered_at, exited_at);
    assert_eq!(bill.extension_block_count(), 1);
    assert_eq!(bill.extension_fee_total(), expected_fee);
}

#[rstest]
fn it_should_bill_a_zero_length_visit_at_the_course_fee() {
    let at = instant("2021-07-17T23:30:00+09:00");
    let bill = bill("standard", at, at);
    assert_eq!(bill.duration_at_facility(), TimeDelta::zero());
    assert_eq!(bill.total_pre_tax(), 500);
}

#[rstest]
fn it_should_keep_every_extension_fee_a_sum_of_the_two_block_prices() {
    let entered_at = instant("2021-07-17T06:00:00+09:00");
    for minutes in (0..(26 * 60)).step_by(7) {
        let exited_at = entered_at + TimeDelta::minutes(minutes);
        let bill = bill("3-hour pack", entered_at, exited_at);
        let night = bill.blocks().filter(|b| b.is_night).count() as u64;
        let standard = bill.extension_block_count() - night;
        assert_eq!(bill.extension_fee_total(), night * 115 + standard * 100);
    }
}

#[rstest]
fn it_should_reject_unknown_courses_and_reversed_intervals() {
    let catalog = StaticCourseCatalog::new();
    let policy = PricingPolicy::default();
    let unknown = BillingRequest {
        course: "unlimited".into(),
        entered_at: instant("2021-07-17T10:00:00+09:00"),
        exited_at: instant("2021-07-17T11:00:00+09:00"),
    };
    assert!(matches!(
        compute_bill(&catalog, &unknown, &policy),
        Err(BillingError::UnknownCourse(_))
    ));

    let reversed = BillingRequest {
        course: "standard".into(),
        entered_at: instant("2021-07-17T11:00:00+09:00"),
        exited_at: instant("2021-07-17T10:00:00+09:00"),
    };
    assert_eq!(
        compute_bill(&catalog, &reversed, &policy),
        Err(BillingError::ExitBeforeEntry)
    );
}
