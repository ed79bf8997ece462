use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::billing::core::course::CourseDefinition;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlCourse {
    pub identifier: String,
    pub base_fee: u64,
    pub base_duration_hours: u32,
}

impl From<CourseDefinition> for GqlCourse {
    fn from(course: CourseDefinition) -> Self {
        Self {
            identifier: course.id.to_string(),
            base_fee: course.base_fee,
            base_duration_hours: course.base_duration_hours,
        }
    }
}

#[derive(Default)]
pub struct CourseQuery;

#[Object]
impl CourseQuery {
    async fn courses(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .list_courses_handler
            .handle()
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
