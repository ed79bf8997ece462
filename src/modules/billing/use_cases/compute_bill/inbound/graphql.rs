use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, FixedOffset};

use crate::modules::billing::core::bill::Bill;
use crate::modules::billing::use_cases::compute_bill::command::BillingRequest;
use crate::shared::core::primitives::TaxRate;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlBill {
    pub course: String,
    pub course_fee: u64,
    pub extension_blocks: u64,
    pub night_blocks: u64,
    pub standard_blocks: u64,
    pub extension_minutes: i64,
    pub extension_fee_total: u64,
    pub total_pre_tax: u64,
    pub total_with_tax: u64,
    pub tax_rate_percent: u32,
    pub duration_seconds: i64,
}

impl GqlBill {
    fn from_bill(bill: &Bill, tax_rate: TaxRate) -> Self {
        Self {
            course: bill.course().id.to_string(),
            course_fee: bill.course_fee(),
            extension_blocks: bill.extension_block_count(),
            night_blocks: bill.night_block_count(),
            standard_blocks: bill.standard_block_count(),
            extension_minutes: bill.extension_minutes(),
            extension_fee_total: bill.extension_fee_total(),
            total_pre_tax: bill.total_pre_tax(),
            total_with_tax: bill.total_with_tax(tax_rate),
            tax_rate_percent: tax_rate.as_percent(),
            duration_seconds: bill.duration_at_facility().num_seconds(),
        }
    }
}

fn parse_instant(name: &str, value: &str) -> GqlResult<DateTime<FixedOffset>> {
    value
        .parse::<DateTime<FixedOffset>>()
        .map_err(|e| async_graphql::Error::new(format!("invalid {name}: {e}")))
}

#[derive(Default)]
pub struct BillQuery;

#[Object]
impl BillQuery {
    async fn compute_bill(
        &self,
        context: &Context<'_>,
        course: String,
        entered_at: String,
        exited_at: String,
    ) -> GqlResult<GqlBill> {
        let state = context.data_unchecked::<AppState>();
        let request = BillingRequest {
            course,
            entered_at: parse_instant("enteredAt", &entered_at)?,
            exited_at: parse_instant("exitedAt", &exited_at)?,
        };
        let handler = state.compute_bill_handler.clone();
        let tax_rate = handler.tax_rate();
        let bill = tokio::task::spawn_blocking(move || handler.handle(&request))
            .await
            .map_err(|e| async_graphql::Error::new(format!("bill computation failed: {e}")))?
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlBill::from_bill(&bill, tax_rate))
    }
}
