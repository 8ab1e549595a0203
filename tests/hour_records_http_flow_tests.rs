// End to end flow over the public router with the in-memory store.
//
// - Create entries through REST, page through them, edit tags, delete.
// - Every request carries the x-user-id identity header.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use hour_records::modules::hours::adapters::outbound::hour_store_in_memory::InMemoryHourStore;
use hour_records::shell::http::router;
use hour_records::shell::state::AppState;

const OWNER: &str = "user-fixed-0001";

fn app() -> Router {
    let store = InMemoryHourStore::new()
        .with_project("p-1", "Internal")
        .with_tag("t1", "Meeting")
        .with_tag("t2", "Review")
        .with_tag("t3", "Planning")
        .with_tag("t4", "Support");
    router(AppState::new(Arc::new(store), 10))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", OWNER)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn pages_edits_and_deletes_hours_over_rest() {
    let router = app();

    for day in 1..=12 {
        let (status, _) = send(
            &router,
            "POST",
            "/hours",
            Some(json!({
                "value": 1.25,
                "date": format!("2024-03-{day:02}"),
                "description": format!("Day {day}"),
                "project_id": "p-1",
                "tag_ids": ["t1"],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, first) = send(&router, "GET", "/hours?from=2024-03-01&to=2024-03-31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["rows"].as_array().unwrap().len(), 10);
    assert_eq!(first["next"], 2);

    let (_, second) = send(&router, "GET", "/hours?from=2024-03-01&to=2024-03-31&page=2", None).await;
    assert_eq!(second["rows"].as_array().unwrap().len(), 2);
    assert_eq!(second["next"], Value::Null);
    assert_eq!(second["previous"], 1);

    let id = first["rows"][0]["id"].as_str().unwrap().to_string();
    let (status, edited) = send(
        &router,
        "PUT",
        &format!("/hours/{id}"),
        Some(json!({
            "value": 2,
            "date": "2024-03-12",
            "description": "Day 12",
            "project_id": "p-1",
            "tag_ids": ["t2", "t4"],
            "existing_tag_ids": ["t1"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["tag_ids"], json!(["t2", "t4"]));

    let (_, totals) = send(&router, "GET", "/tags/totals", None).await;
    assert_eq!(totals[0], json!({ "tag_id": "t1", "name": "Meeting", "hours": 13.75 }));
    assert_eq!(totals[1]["hours"], 2.0);

    let (status, _) = send(&router, "DELETE", &format!("/hours/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "GET", &format!("/hours/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, calendar) = send(&router, "GET", "/hours/calendar?from=2024-03-10&to=2024-03-12", None).await;
    assert_eq!(calendar.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn serves_graphiql_on_get() {
    let response = app()
        .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
