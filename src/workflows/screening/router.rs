use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{MeansDeclaration, ProfileId, ScreeningSubmission};
use super::repository::{ProfileRepository, ReferralPublisher, RepositoryError};
use super::service::{ScreeningService, ScreeningServiceError};

/// Router builder exposing HTTP endpoints for intake, means declaration, and
/// scheme screening.
pub fn screening_router<R, A>(service: Arc<ScreeningService<R, A>>) -> Router
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    Router::new()
        .route("/api/v1/screening/profiles", post(register_handler::<R, A>))
        .route(
            "/api/v1/screening/profiles/:profile_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/screening/profiles/:profile_id/means",
            put(means_handler::<R, A>),
        )
        .route(
            "/api/v1/screening/profiles/:profile_id/determinations",
            post(screen_handler::<R, A>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterProfileRequest {
    #[serde(flatten)]
    submission: ScreeningSubmission,
    /// Assessment date for age resolution; defaults to today.
    #[serde(default)]
    assessed_on: Option<NaiveDate>,
}

pub(crate) async fn register_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    axum::Json(request): axum::Json<RegisterProfileRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    let assessed_on = request
        .assessed_on
        .unwrap_or_else(|| Local::now().date_naive());

    match service.register(&request.submission, assessed_on) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(ScreeningServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "profile already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn means_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(profile_id): Path<String>,
    axum::Json(declaration): axum::Json<MeansDeclaration>,
) -> Response
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    let id = ProfileId(profile_id);
    match service.submit_means(&id, &declaration) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ScreeningServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn screen_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    let id = ProfileId(profile_id);
    match service.screen(&id) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<ScreeningService<R, A>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    let id = ProfileId(profile_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn not_found_response(id: &ProfileId) -> Response {
    let payload = json!({
        "profile_id": id.0,
        "error": "profile not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
