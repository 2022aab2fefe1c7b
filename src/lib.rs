//! Gym Backend - Course scheduling for a fitness center.
//!
//! Assigns trainers to courses on a given date and time slot, refusing
//! non-trainers and overlapping bookings of the same trainer.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, courses, schedules and conflict detection
//! - **services**: Scheduling use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CourseSchedule, CourseScheduleRequest, CourseScheduleResponse, TimeSlot, User, UserRole};
pub use errors::{AppError, AppResult};
