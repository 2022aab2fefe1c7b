//! Domain layer - Core business entities and logic
//!
//! Contains the gym concepts this backend manages, independent of
//! storage and HTTP concerns. Scheduling rules (time slot validation and
//! trainer double-booking detection) live in `course_schedule`.

pub mod course;
pub mod course_schedule;
pub mod user;

pub use course::Course;
pub use course_schedule::{
    conflict_error, find_conflict, CourseSchedule, CourseScheduleRequest, CourseScheduleResponse,
    NewCourseSchedule, TimeSlot,
};
pub use user::{User, UserRole};
