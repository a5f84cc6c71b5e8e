//! Course handlers

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use course_registry::{Course, CourseUpdate, NewCourse, RegistryError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    course: Course,
}

#[derive(Debug, Serialize)]
pub struct CourseCreatedResponse {
    #[serde(rename = "courseId")]
    course_id: String,
}

#[derive(Debug, Serialize)]
pub struct CourseDeletedResponse {
    course: Option<Course>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn map_error(err: RegistryError) -> ApiError {
    let (status, message) = match &err {
        RegistryError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        RegistryError::Database(e) => {
            tracing::error!("Registry backend failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            )
        }
    };
    (status, Json(ErrorResponse { error: message }))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<CourseListResponse>, ApiError> {
    match state.registry.list().await {
        Ok(courses) => Ok(Json(CourseListResponse { courses })),
        Err(e) => Err(map_error(e)),
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    match state.registry.get(&id).await {
        Ok(course) => Ok(Json(CourseResponse { course })),
        Err(e) => Err(map_error(e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(req_body): Json<NewCourse>,
) -> Result<(StatusCode, Json<CourseCreatedResponse>), ApiError> {
    match state.registry.create(req_body).await {
        Ok(course) => Ok((
            StatusCode::CREATED,
            Json(CourseCreatedResponse {
                course_id: course.id,
            }),
        )),
        Err(e) => Err(map_error(e)),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req_body): Json<CourseUpdate>,
) -> Result<Json<CourseResponse>, ApiError> {
    match state.registry.update(&id, req_body).await {
        Ok(course) => Ok(Json(CourseResponse { course })),
        Err(e) => Err(map_error(e)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDeletedResponse>, ApiError> {
    match state.registry.delete(&id).await {
        Ok(course) => Ok(Json(CourseDeletedResponse { course })),
        Err(e) => Err(map_error(e)),
    }
}
