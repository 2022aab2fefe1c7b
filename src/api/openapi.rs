//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::course_schedule_handler;
use crate::domain::{CourseScheduleRequest, CourseScheduleResponse};

/// OpenAPI documentation for the gym backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gym Backend",
        version = "0.1.0",
        description = "Course scheduling for a fitness center: assigns trainers to courses without double-booking",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        course_schedule_handler::list_schedules,
        course_schedule_handler::create_schedule,
        course_schedule_handler::get_schedule,
        course_schedule_handler::update_schedule,
        course_schedule_handler::delete_schedule,
    ),
    components(
        schemas(
            CourseScheduleRequest,
            CourseScheduleResponse,
        )
    ),
    tags(
        (name = "Course Schedules", description = "Trainer course scheduling")
    )
)]
pub struct ApiDoc;
