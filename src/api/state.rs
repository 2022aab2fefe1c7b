//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CourseScheduleService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Course schedule service
    pub course_schedule_service: Arc<dyn CourseScheduleService>,
    /// Database connection, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state with SeaORM-backed services over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Build state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            course_schedule_service: container.course_schedules(),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        course_schedule_service: Arc<dyn CourseScheduleService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            course_schedule_service,
            database,
        }
    }
}
