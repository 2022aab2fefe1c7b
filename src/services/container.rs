//! Service Container - Centralized service access.
//!
//! Handlers depend on service traits, never on concrete managers, so the
//! container is the single place where the SeaORM-backed graph is wired.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{CourseScheduleManager, CourseScheduleService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get course schedule service
    fn course_schedules(&self) -> Arc<dyn CourseScheduleService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    course_schedule_service: Arc<dyn CourseScheduleService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let course_schedule_service = Arc::new(CourseScheduleManager::new(uow));

        Self {
            course_schedule_service,
        }
    }
}

impl ServiceContainer for Services {
    fn course_schedules(&self) -> Arc<dyn CourseScheduleService> {
        self.course_schedule_service.clone()
    }
}
