use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

pub use crate::modules::billing::use_cases::compute_bill::inbound::graphql::BillQuery;
pub use crate::modules::billing::use_cases::list_courses::inbound::graphql::CourseQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BillQuery, CourseQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
