//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They reach repositories only through the
//! Unit of Work.

pub mod container;
mod course_schedule_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use course_schedule_service::{CourseScheduleManager, CourseScheduleService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
