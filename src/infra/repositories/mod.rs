//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Users and courses are looked up only; schedules are fully managed.

mod course_repository;
mod course_schedule_repository;
pub(crate) mod entities;
mod user_repository;

pub use course_repository::{CourseRepository, CourseStore};
pub use course_schedule_repository::{CourseScheduleRepository, CourseScheduleStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use course_schedule_repository::MockCourseScheduleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
