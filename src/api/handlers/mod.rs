//! HTTP request handlers.

pub mod course_schedule_handler;

pub use course_schedule_handler::course_schedule_routes;
