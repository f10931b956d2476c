use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::access::{AccessDecision, ProtectedView, RedirectTarget};
use super::actions::{ActionError, ApplicationForm, JobDraft};
use super::domain::{JobFilter, JobId, UserId};
use super::notify::Notifier;
use super::service::JobBoardService;
use super::session::{LoginError, SessionPersistence};

type SharedService<P, N> = Arc<JobBoardService<P, N>>;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) password: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdminSearch {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

/// Unreadable query strings (repeated keys, bad encoding) degrade to "no criteria".
fn lenient<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(value)) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring unreadable query string");
            T::default()
        }
    }
}

/// Router builder exposing listings, the demo session and role-gated actions.
pub fn board_router<P, N>(service: SharedService<P, N>) -> Router
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(list_handler::<P, N>).post(post_job_handler::<P, N>),
        )
        .route("/api/v1/jobs/featured", get(featured_handler::<P, N>))
        .route("/api/v1/jobs/facets", get(facets_handler::<P, N>))
        .route("/api/v1/jobs/:job_id", get(job_handler::<P, N>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(apply_handler::<P, N>),
        )
        .route("/api/v1/admin/jobs", get(admin_jobs_handler::<P, N>))
        .route(
            "/api/v1/admin/jobs/:job_id",
            delete(delete_job_handler::<P, N>),
        )
        .route("/api/v1/admin/users", get(admin_users_handler::<P, N>))
        .route(
            "/api/v1/admin/users/:user_id",
            delete(delete_user_handler::<P, N>),
        )
        .route("/api/v1/session", get(session_handler::<P, N>))
        .route("/api/v1/session/login", post(login_handler::<P, N>))
        .route("/api/v1/session/logout", post(logout_handler::<P, N>))
        .route("/api/v1/views/:view", get(view_handler::<P, N>))
        .route("/api/v1/profile", get(profile_handler::<P, N>))
        .route("/api/v1/notices", get(notices_handler::<P, N>))
        .with_state(service)
}

pub(crate) async fn list_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    criteria: Result<Query<JobFilter>, QueryRejection>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    let jobs = service.list_jobs(&lenient(criteria).normalized());
    (StatusCode::OK, Json(jobs)).into_response()
}

pub(crate) async fn featured_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    (StatusCode::OK, Json(service.featured_jobs())).into_response()
}

pub(crate) async fn facets_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    (StatusCode::OK, Json(service.facets())).into_response()
}

pub(crate) async fn job_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Path(job_id): Path<String>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.job(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn post_job_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.post_job(draft) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn apply_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Path(job_id): Path<String>,
    Json(form): Json<ApplicationForm>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.apply(&JobId(job_id), form) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn delete_job_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Path(job_id): Path<String>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.delete_job(&JobId(job_id)) {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn admin_jobs_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    search: Result<Query<AdminSearch>, QueryRejection>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    let search = lenient(search);
    match service.admin_jobs(search.q.as_deref().unwrap_or_default()) {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn admin_users_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    search: Result<Query<AdminSearch>, QueryRejection>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    let search = lenient(search);
    match service.admin_users(search.q.as_deref().unwrap_or_default()) {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn delete_user_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.delete_user(&UserId(user_id)) {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn session_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    (StatusCode::OK, Json(service.session_view())).into_response()
}

pub(crate) async fn login_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.login(&request.email, &request.password) {
        Ok(_) => (StatusCode::OK, Json(service.session_view())).into_response(),
        Err(err) => {
            let status = match err {
                LoginError::EmailRequired => StatusCode::UNPROCESSABLE_ENTITY,
                LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            };
            (status, Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}

pub(crate) async fn logout_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    service.logout();
    (StatusCode::OK, Json(service.session_view())).into_response()
}

pub(crate) async fn view_handler<P, N>(
    State(service): State<SharedService<P, N>>,
    Path(view): Path<String>,
) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    let Some(view) = ProtectedView::from_slug(&view) else {
        let payload = json!({ "error": format!("unknown view '{view}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    match service.authorize_view(view) {
        AccessDecision::Allow => {
            let payload = json!({ "view": view.path(), "decision": "allow" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        AccessDecision::Deny(target) => {
            let payload = json!({
                "view": view.path(),
                "decision": "deny",
                "redirect": target.path(),
            });
            (redirect_status(target), Json(payload)).into_response()
        }
    }
}

pub(crate) async fn profile_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    match service.profile() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => action_error_response(err),
    }
}

pub(crate) async fn notices_handler<P, N>(State(service): State<SharedService<P, N>>) -> Response
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    (StatusCode::OK, Json(service.drain_notices())).into_response()
}

fn redirect_status(target: RedirectTarget) -> StatusCode {
    match target {
        RedirectTarget::SignIn => StatusCode::UNAUTHORIZED,
        RedirectTarget::Home => StatusCode::FORBIDDEN,
    }
}

pub(crate) fn action_error_response(err: ActionError) -> Response {
    let status = match &err {
        ActionError::SignInRequired | ActionError::SignInToApply => StatusCode::UNAUTHORIZED,
        ActionError::WrongRole | ActionError::JobSeekersOnly => StatusCode::FORBIDDEN,
        ActionError::MissingRequiredFields => StatusCode::UNPROCESSABLE_ENTITY,
        ActionError::JobNotFound(_) | ActionError::UserNotFound(_) => StatusCode::NOT_FOUND,
    };

    let payload = match err.redirect() {
        Some(target) => json!({ "error": err.to_string(), "redirect": target.path() }),
        None => json!({ "error": err.to_string() }),
    };
    (status, Json(payload)).into_response()
}
