// Pure composition of course lookup and pricing for one request.
//
// Responsibilities
// - Resolve the course through the catalog port.
// - Build the bill with the given pricing policy.
// - Never perform input or output.

use crate::modules::billing::core::bill::Bill;
use crate::modules::billing::core::catalog::CourseCatalog;
use crate::modules::billing::core::errors::BillingError;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::use_cases::compute_bill::command::BillingRequest;

pub fn compute_bill<C>(
    catalog: &C,
    request: &BillingRequest,
    policy: &PricingPolicy,
) -> Result<Bill, BillingError>
where
    C: CourseCatalog + ?Sized,
{
    let course = catalog.resolve(&request.course)?;
    Bill::new(course, request.entered_at, request.exited_at, policy)
}
