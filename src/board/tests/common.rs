use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use crate::board::actions::JobDraft;
use crate::board::catalog::JobCatalog;
use crate::board::notify::{InMemoryNotifier, Notifier};
use crate::board::router::board_router;
use crate::board::service::JobBoardService;
use crate::board::session::MemorySessionPersistence;

pub(super) type TestService = JobBoardService<MemorySessionPersistence, InMemoryNotifier>;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
}

pub(super) fn build_service() -> (Arc<TestService>, MemorySessionPersistence, Arc<InMemoryNotifier>) {
    let persistence = MemorySessionPersistence::default();
    let notifier = Arc::new(InMemoryNotifier::default());
    let service = Arc::new(JobBoardService::new(
        Arc::new(JobCatalog::demo()),
        Arc::new(persistence.clone()),
        notifier.clone(),
    ));
    (service, persistence, notifier)
}

pub(super) fn signed_in_service(email: &str) -> (Arc<TestService>, Arc<InMemoryNotifier>) {
    let (service, _, notifier) = build_service();
    service.login(email, "").expect("demo account exists");
    notifier.drain();
    (service, notifier)
}

pub(super) fn router_for(service: Arc<TestService>) -> Router {
    board_router(service)
}

pub(super) fn draft() -> JobDraft {
    JobDraft {
        title: "Site Reliability Engineer".to_string(),
        company: "DataFlow Systems".to_string(),
        location: "Remote".to_string(),
        description: "Keep the ingestion platform healthy".to_string(),
        salary: "$140,000".to_string(),
        category: "Technology".to_string(),
        job_type: "Full-time".to_string(),
        deadline: None,
        skills: "Rust, Terraform".to_string(),
    }
}

pub(super) async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.expect("router responds")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("valid request")
}

pub(super) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("json body")))
        .expect("valid request")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json response")
}

pub(super) async fn expect_status(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    json_body(response).await
}
