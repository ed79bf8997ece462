use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::modules::billing::core::course::CourseDefinition;
use crate::shared::core::primitives::Amount;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseResponse {
    pub identifier: String,
    pub base_fee: Amount,
    pub base_duration_hours: u32,
}

impl From<CourseDefinition> for CourseResponse {
    fn from(course: CourseDefinition) -> Self {
        Self {
            identifier: course.id.to_string(),
            base_fee: course.base_fee,
            base_duration_hours: course.base_duration_hours,
        }
    }
}

pub async fn handle(State(state): State<AppState>) -> Json<Vec<CourseResponse>> {
    Json(
        state
            .list_courses_handler
            .handle()
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}
