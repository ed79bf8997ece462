use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::use_cases::compute_bill::inbound::http::BillResponse;
use crate::shared::core::primitives::TaxRate;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::compute_bill::BillingRequestBuilder;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn bills_a_night_visit_through_the_router() {
    let request = BillingRequestBuilder::new()
        .course("5-hour pack")
        .entered_at("2021-07-17T23:00:00+09:00")
        .exited_at("2021-07-18T07:20:01+09:00")
        .build();
    let body = serde_json::json!({
        "course": request.course,
        "entered_at": request.entered_at.to_rfc3339(),
        "exited_at": request.exited_at.to_rfc3339(),
    });

    let app = router(AppState::new(PricingPolicy::default(), TaxRate::default()));
    let response = app
        .oneshot(
            Request::post("/bills")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let bill: BillResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(bill.extension_blocks, 21);
    assert_eq!(bill.night_blocks, 6);
    assert_eq!(bill.standard_blocks, 15);
    assert_eq!(bill.extension_minutes, 210);
    assert_eq!(bill.extension_fee_total, 2190);
    assert_eq!(bill.total_pre_tax, 3690);
    assert_eq!(bill.total_with_tax, 4059);
    assert_eq!(bill.duration_seconds, 8 * 3600 + 20 * 60 + 1);
}

#[tokio::test]
async fn serves_the_course_list_and_graphiql() {
    let app = router(AppState::new(PricingPolicy::default(), TaxRate::default()));

    let courses = app
        .clone()
        .oneshot(Request::get("/courses").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(courses.status(), StatusCode::OK);

    let graphiql = app
        .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(graphiql.status(), StatusCode::OK);
}
