//! Integration tests for API endpoints.
//!
//! These tests use a mock service behind the real router, so no database
//! connection is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use gym_backend::api::{create_router, AppState};
use gym_backend::domain::{CourseScheduleRequest, CourseScheduleResponse};
use gym_backend::errors::{AppError, AppResult};
use gym_backend::infra::Database;
use gym_backend::services::CourseScheduleService;

// =============================================================================
// Mock Service for Testing
// =============================================================================

const EXISTING_ID: i64 = 1;
const MEMBER_ID: i64 = 3;

fn response(id: i64, request: &CourseScheduleRequest) -> CourseScheduleResponse {
    CourseScheduleResponse {
        id,
        course_date: request.course_date,
        start_time: request.start_time,
        end_time: request.end_time,
        trainer_id: request.trainer_id,
        course_id: request.course_id,
    }
}

fn existing() -> CourseScheduleResponse {
    CourseScheduleResponse {
        id: EXISTING_ID,
        course_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        trainer_id: 1,
        course_id: 1,
    }
}

/// Knows a single schedule and refuses user `MEMBER_ID` as trainer
struct MockCourseScheduleService;

impl MockCourseScheduleService {
    fn check_trainer(request: &CourseScheduleRequest) -> AppResult<()> {
        if request.trainer_id == MEMBER_ID {
            return Err(AppError::invalid_argument(
                "Only users with TRAINER role can schedule course.",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CourseScheduleService for MockCourseScheduleService {
    async fn create_schedule(&self, request: CourseScheduleRequest) -> AppResult<CourseScheduleResponse> {
        Self::check_trainer(&request)?;
        request.time_slot()?;
        Ok(response(2, &request))
    }

    async fn update_schedule(
        &self,
        id: i64,
        request: CourseScheduleRequest,
    ) -> AppResult<CourseScheduleResponse> {
        if id != EXISTING_ID {
            return Err(AppError::not_found("CourseSchedule", id));
        }
        Self::check_trainer(&request)?;
        Ok(response(id, &request))
    }

    async fn list_schedules(&self) -> AppResult<Vec<CourseScheduleResponse>> {
        Ok(vec![existing()])
    }

    async fn get_schedule(&self, id: i64) -> AppResult<CourseScheduleResponse> {
        if id == EXISTING_ID {
            Ok(existing())
        } else {
            Err(AppError::not_found("CourseSchedule", id))
        }
    }

    async fn delete_schedule(&self, id: i64) -> AppResult<()> {
        if id == EXISTING_ID {
            Ok(())
        } else {
            Err(AppError::not_found("CourseSchedule", id))
        }
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

/// Router over the mock service and a connection that was never opened
fn app() -> Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    create_router(AppState::new(Arc::new(MockCourseScheduleService), database))
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn schedule_body(trainer_id: i64, start: &str, end: &str) -> Value {
    json!({
        "course_date": "2024-06-01",
        "start_time": start,
        "end_time": end,
        "trainer_id": trainer_id,
        "course_id": 1
    })
}

// =============================================================================
// Root and Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let (status, body) = send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Gym Backend");
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let (status, body) = send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/course-schedules/{id}"].is_object());

    // Schema examples are rendered into the document by the library build
    let request = &body["components"]["schemas"]["CourseScheduleRequest"]["properties"];
    assert_eq!(request["trainer_id"]["example"], 1);
    assert_eq!(request["course_date"]["example"], "2024-06-01");
}

// =============================================================================
// Course Schedule Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_list_schedules() {
    let (status, body) = send(Method::GET, "/course-schedules", None).await;

    assert_eq!(status, StatusCode::OK);
    let list: Vec<CourseScheduleResponse> = serde_json::from_value(body).unwrap();
    assert_eq!(list, vec![existing()]);
}

#[tokio::test]
async fn test_create_schedule_returns_created() {
    let (status, body) = send(
        Method::POST,
        "/course-schedules",
        Some(schedule_body(1, "10:00:00", "11:00:00")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
    assert_eq!(body["course_date"], "2024-06-01");
    assert_eq!(body["start_time"], "10:00:00");
    assert_eq!(body["end_time"], "11:00:00");
}

#[tokio::test]
async fn test_create_rejects_non_trainer() {
    let (status, body) = send(
        Method::POST,
        "/course-schedules",
        Some(schedule_body(MEMBER_ID, "10:00:00", "11:00:00")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(
        body["error"]["message"],
        "Only users with TRAINER role can schedule course."
    );
}

#[tokio::test]
async fn test_create_rejects_inverted_slot() {
    let (status, body) = send(
        Method::POST,
        "/course-schedules",
        Some(schedule_body(1, "11:00:00", "10:00:00")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Start time 11:00 must be before end time 10:00"
    );
}

#[tokio::test]
async fn test_create_validates_ids() {
    let (status, body) = send(
        Method::POST,
        "/course-schedules",
        Some(schedule_body(0, "10:00:00", "11:00:00")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "trainer_id must be a positive id");
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let (status, body) = send(
        Method::POST,
        "/course-schedules",
        Some(json!({ "course_date": "not-a-date" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_schedule() {
    let (status, body) = send(Method::GET, "/course-schedules/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], EXISTING_ID);
    assert_eq!(body["trainer_id"], 1);
}

#[tokio::test]
async fn test_get_missing_schedule_is_not_found() {
    let (status, body) = send(Method::GET, "/course-schedules/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "CourseSchedule not found with id: 42");
}

#[tokio::test]
async fn test_update_schedule() {
    let (status, body) = send(
        Method::PUT,
        "/course-schedules/1",
        Some(schedule_body(1, "09:15:00", "10:15:00")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], EXISTING_ID);
    assert_eq!(body["start_time"], "09:15:00");
}

#[tokio::test]
async fn test_update_missing_schedule_is_not_found() {
    let (status, _) = send(
        Method::PUT,
        "/course-schedules/42",
        Some(schedule_body(1, "09:15:00", "10:15:00")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_schedule_returns_no_content() {
    let (status, body) = send(Method::DELETE, "/course-schedules/1", None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_delete_missing_schedule_is_not_found() {
    let (status, _) = send(Method::DELETE, "/course-schedules/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/course-schedules/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
