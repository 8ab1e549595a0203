use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::transport::OWNER_HEADER;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::store::{OWNER, seed_hours, seeded_store};

async fn app(days: u32) -> Router {
    let store = Arc::new(seeded_store());
    if days > 0 {
        seed_hours(&store, OWNER, 1..=days).await;
    }
    router(AppState::new(store, 10))
}

async fn execute(router: Router, owner: Option<&str>, query: &str) -> Value {
    let mut request = Request::post("/gql").header("content-type", "application/json");
    if let Some(owner) = owner {
        request = request.header(OWNER_HEADER, owner);
    }
    let body = json!({ "query": query }).to_string();
    let response = router
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn lists_a_page_of_hours_over_graphql() {
    let response = execute(
        app(12).await,
        Some(OWNER),
        r#"{ hours(from: "2024-03-01", to: "2024-03-31", pageSize: 10) { count next previous rows { date value tagIds } } }"#,
    )
    .await;

    let page = &response["data"]["hours"];
    assert_eq!(page["count"], 12);
    assert_eq!(page["next"], 2);
    assert_eq!(page["previous"], Value::Null);
    assert_eq!(page["rows"].as_array().unwrap().len(), 10);
    assert_eq!(page["rows"][0]["date"], "2024-03-12");
    assert_eq!(page["rows"][0]["tagIds"], json!(["t1"]));
}

#[tokio::test]
async fn echoes_the_next_cursor_over_graphql() {
    let router = app(5).await;
    let first = execute(
        router.clone(),
        Some(OWNER),
        r#"{ hoursInfinite(limit: 2) { rows { id } nextCursor { page limit } } }"#,
    )
    .await;
    assert_eq!(
        first["data"]["hoursInfinite"]["nextCursor"],
        json!({ "page": 2, "limit": 2 })
    );

    let last = execute(
        router,
        Some(OWNER),
        r#"{ hoursInfinite(cursor: { page: 3, limit: 2 }) { rows { id } nextCursor { page } } }"#,
    )
    .await;
    assert_eq!(last["data"]["hoursInfinite"]["rows"].as_array().unwrap().len(), 1);
    assert_eq!(last["data"]["hoursInfinite"]["nextCursor"], Value::Null);
}

#[tokio::test]
async fn reports_the_error_code_without_an_owner() {
    let response = execute(app(0).await, None, r#"{ hours { count } }"#).await;
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        "UNAUTHENTICATED"
    );
}

#[tokio::test]
async fn creates_and_lists_exceptions_over_graphql() {
    let router = app(0).await;
    let created = execute(
        router.clone(),
        Some(OWNER),
        r#"mutation { createHourException(date: "2024-12-25", hours: 8, kind: HOLIDAY_WORK) { kind category hours } }"#,
    )
    .await;
    assert_eq!(
        created["data"]["createHourException"],
        json!({ "kind": "HOLIDAY_WORK", "category": "EXTRA_WORKING", "hours": 8.0 })
    );

    let listed = execute(
        router,
        Some(OWNER),
        r#"{ hourExceptionsInfinite(category: NON_WORKING) { rows { id } nextCursor { page } } }"#,
    )
    .await;
    assert_eq!(
        listed["data"]["hourExceptionsInfinite"]["rows"],
        json!([])
    );
}

#[tokio::test]
async fn creates_edits_and_deletes_an_hour_over_graphql() {
    let router = app(0).await;
    let created = execute(
        router.clone(),
        Some(OWNER),
        r#"mutation { createHour(value: 2.5, date: "2024-03-04", description: "Review", projectId: "p-1", tagIds: ["t1", "t2", "t3"]) { id value } }"#,
    )
    .await;
    let id = created["data"]["createHour"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["createHour"]["value"], 2.5);

    let edited = execute(
        router.clone(),
        Some(OWNER),
        &format!(
            r#"mutation {{ editHour(id: "{id}", value: 3, date: "2024-03-04", description: "Review", projectId: "p-1", tagIds: ["t2", "t4"], existingTagIds: ["t1", "t2", "t3"]) {{ value tagIds }} }}"#
        ),
    )
    .await;
    assert_eq!(
        edited["data"]["editHour"],
        json!({ "value": 3.0, "tagIds": ["t2", "t4"] })
    );

    let denied = execute(
        router.clone(),
        Some("user-fixed-0002"),
        &format!(r#"mutation {{ deleteHour(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(
        denied["errors"][0]["extensions"]["code"],
        "PERMISSION_DENIED"
    );

    let deleted = execute(
        router,
        Some(OWNER),
        &format!(r#"mutation {{ deleteHour(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(deleted["data"]["deleteHour"], true);
}
