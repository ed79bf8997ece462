// Compute-bill handler orchestrates one billing request.
//
// Responsibilities
// - Hand the request to the pure compute function with the injected catalog and policy.
// - Log the outcome.
// - Carry the tax rate adapters should report totals with.

use crate::modules::billing::core::bill::Bill;
use crate::modules::billing::core::catalog::CourseCatalog;
use crate::modules::billing::core::errors::BillingError;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::use_cases::compute_bill::command::BillingRequest;
use crate::modules::billing::use_cases::compute_bill::compute::compute_bill;
use crate::shared::core::primitives::TaxRate;
use std::sync::Arc;

pub struct ComputeBillHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    catalog: Arc<TCatalog>,
    policy: PricingPolicy,
    tax_rate: TaxRate,
}

impl<TCatalog> ComputeBillHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, policy: PricingPolicy, tax_rate: TaxRate) -> Self {
        Self {
            catalog,
            policy,
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn handle(&self, request: &BillingRequest) -> Result<Bill, BillingError> {
        tracing::debug!(
            course = %request.course,
            entered_at = %request.entered_at,
            exited_at = %request.exited_at,
            "computing bill"
        );
        match compute_bill(&*self.catalog, request, &self.policy) {
            Ok(bill) => {
                tracing::info!(
                    course = %bill.course().id,
                    extension_blocks = bill.extension_block_count(),
                    night_blocks = bill.night_block_count(),
                    total_pre_tax = bill.total_pre_tax(),
                    total_with_tax = bill.total_with_tax(self.tax_rate),
                    "bill computed"
                );
                Ok(bill)
            }
            Err(error) => {
                tracing::warn!(course = %request.course, %error, "bill rejected");
                Err(error)
            }
        }
    }
}
