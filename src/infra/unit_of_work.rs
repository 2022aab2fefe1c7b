//! Unit of Work pattern implementation.
//!
//! Centralizes access to every repository the scheduling use cases need,
//! so services depend on one abstraction instead of three.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CourseRepository, CourseScheduleRepository, CourseScheduleStore, CourseStore, UserRepository,
    UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// For testing, implement it over mock or in-memory repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get course repository
    fn courses(&self) -> Arc<dyn CourseRepository>;

    /// Get course schedule repository
    fn course_schedules(&self) -> Arc<dyn CourseScheduleRepository>;
}

/// SeaORM-backed implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    course_repo: Arc<CourseStore>,
    course_schedule_repo: Arc<CourseScheduleStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance sharing one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            course_repo: Arc::new(CourseStore::new(db.clone())),
            course_schedule_repo: Arc::new(CourseScheduleStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.course_repo.clone()
    }

    fn course_schedules(&self) -> Arc<dyn CourseScheduleRepository> {
        self.course_schedule_repo.clone()
    }
}
