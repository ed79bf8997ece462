use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::billing::use_cases::compute_bill::inbound::http as compute_http;
use crate::modules::billing::use_cases::list_courses::inbound::http as courses_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/bills", post(compute_http::handle))
        .route("/courses", get(courses_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
