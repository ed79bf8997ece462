use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::modules::billing::core::bill::Bill;
use crate::modules::billing::core::errors::BillingError;
use crate::modules::billing::use_cases::compute_bill::command::BillingRequest;
use crate::shared::core::primitives::{Amount, TaxRate};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ComputeBillBody {
    pub course: String,
    pub entered_at: DateTime<FixedOffset>,
    pub exited_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillResponse {
    pub course: String,
    pub course_fee: Amount,
    pub extension_blocks: u64,
    pub night_blocks: u64,
    pub standard_blocks: u64,
    pub extension_minutes: i64,
    pub extension_fee_total: Amount,
    pub total_pre_tax: Amount,
    pub total_with_tax: Amount,
    pub tax_rate_percent: u32,
    pub duration_seconds: i64,
}

impl BillResponse {
    pub fn from_bill(bill: &Bill, tax_rate: TaxRate) -> Self {
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

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ComputeBillBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let request = BillingRequest {
        course: body.course,
        entered_at: body.entered_at,
        exited_at: body.exited_at,
    };

    let handler = state.compute_bill_handler.clone();
    let tax_rate = handler.tax_rate();
    let outcome = tokio::task::spawn_blocking(move || handler.handle(&request)).await;

    match outcome {
        Ok(Ok(bill)) => (
            StatusCode::OK,
            Json(BillResponse::from_bill(&bill, tax_rate)),
        )
            .into_response(),
        Ok(Err(BillingError::UnknownCourse(_))) => StatusCode::NOT_FOUND.into_response(),
        Ok(Err(BillingError::ExitBeforeEntry | BillingError::OutOfRange)) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(error) => {
            tracing::error!(%error, "bill computation did not complete");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
