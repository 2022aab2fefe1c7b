//! Course schedule handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CourseScheduleRequest, CourseScheduleResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create course schedule routes
pub fn course_schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

/// List all course schedules
#[utoipa::path(
    get,
    path = "/course-schedules",
    tag = "Course Schedules",
    responses(
        (status = 200, description = "All course schedules", body = Vec<CourseScheduleResponse>)
    )
)]
pub async fn list_schedules(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseScheduleResponse>>> {
    let schedules = state.course_schedule_service.list_schedules().await?;
    Ok(Json(schedules))
}

/// Schedule a trainer for a course
#[utoipa::path(
    post,
    path = "/course-schedules",
    tag = "Course Schedules",
    request_body = CourseScheduleRequest,
    responses(
        (status = 201, description = "Course schedule created", body = CourseScheduleResponse),
        (status = 400, description = "Invalid time slot, non-trainer user or time conflict"),
        (status = 404, description = "Trainer or course not found")
    )
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseScheduleRequest>,
) -> AppResult<Created<CourseScheduleResponse>> {
    let schedule = state.course_schedule_service.create_schedule(payload).await?;
    Ok(Created(schedule))
}

/// Get course schedule by ID
#[utoipa::path(
    get,
    path = "/course-schedules/{id}",
    tag = "Course Schedules",
    params(
        ("id" = i64, Path, description = "Course schedule ID")
    ),
    responses(
        (status = 200, description = "Course schedule found", body = CourseScheduleResponse),
        (status = 404, description = "Course schedule not found")
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CourseScheduleResponse>> {
    let schedule = state.course_schedule_service.get_schedule(id).await?;
    Ok(Json(schedule))
}

/// Replace a course schedule
#[utoipa::path(
    put,
    path = "/course-schedules/{id}",
    tag = "Course Schedules",
    params(
        ("id" = i64, Path, description = "Course schedule ID")
    ),
    request_body = CourseScheduleRequest,
    responses(
        (status = 200, description = "Course schedule updated", body = CourseScheduleResponse),
        (status = 400, description = "Invalid time slot, non-trainer user or time conflict"),
        (status = 404, description = "Schedule, trainer or course not found")
    )
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CourseScheduleRequest>,
) -> AppResult<Json<CourseScheduleResponse>> {
    let schedule = state
        .course_schedule_service
        .update_schedule(id, payload)
        .await?;

    Ok(Json(schedule))
}

/// Delete a course schedule
#[utoipa::path(
    delete,
    path = "/course-schedules/{id}",
    tag = "Course Schedules",
    params(
        ("id" = i64, Path, description = "Course schedule ID")
    ),
    responses(
        (status = 204, description = "Course schedule deleted"),
        (status = 404, description = "Course schedule not found")
    )
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.course_schedule_service.delete_schedule(id).await?;
    Ok(NoContent)
}
