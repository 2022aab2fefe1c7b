//! Course schedule domain entity, time slots and conflict detection.
//!
//! A schedule assigns one trainer to one course for a date and a half-open
//! time interval `[start, end)`. Two schedules of the same trainer on the
//! same date conflict when their intervals overlap; touching endpoints
//! (one ends exactly when the other starts) do not.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::SCHEDULE_TIME_FORMAT;
use crate::errors::{AppError, AppResult};

/// Validated half-open time interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting empty or inverted intervals.
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::invalid_argument(format!(
                "Start time {} must be before end time {}",
                start.format(SCHEDULE_TIME_FORMAT),
                end.format(SCHEDULE_TIME_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Half-open overlap test against an existing `[start, end)` interval.
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start < end && self.end > start
    }
}

/// Persisted course schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSchedule {
    pub id: i64,
    pub course_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub trainer_id: i64,
    pub course_id: i64,
}

impl CourseSchedule {
    /// Replace every field except identity.
    pub fn reschedule(&mut self, course_date: NaiveDate, slot: TimeSlot, trainer_id: i64, course_id: i64) {
        self.course_date = course_date;
        self.start_time = slot.start();
        self.end_time = slot.end();
        self.trainer_id = trainer_id;
        self.course_id = course_id;
    }
}

/// Schedule that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourseSchedule {
    pub course_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub trainer_id: i64,
    pub course_id: i64,
}

impl NewCourseSchedule {
    pub fn new(course_date: NaiveDate, slot: TimeSlot, trainer_id: i64, course_id: i64) -> Self {
        Self {
            course_date,
            start_time: slot.start(),
            end_time: slot.end(),
            trainer_id,
            course_id,
        }
    }
}

/// Return the first schedule in `existing` whose interval overlaps `slot`.
///
/// `exclude_id` skips the schedule being updated so it never conflicts with
/// its own previous interval.
pub fn find_conflict<'a>(
    slot: &TimeSlot,
    existing: &'a [CourseSchedule],
    exclude_id: Option<i64>,
) -> Option<&'a CourseSchedule> {
    existing
        .iter()
        .filter(|schedule| Some(schedule.id) != exclude_id)
        .find(|schedule| slot.overlaps(schedule.start_time, schedule.end_time))
}

/// Error raised when a trainer is already booked during the requested slot.
pub fn conflict_error(conflicting: &CourseSchedule) -> AppError {
    AppError::invalid_argument(format!(
        "Time conflict detected: Trainer already has a course scheduled from {} to {}",
        conflicting.start_time.format(SCHEDULE_TIME_FORMAT),
        conflicting.end_time.format(SCHEDULE_TIME_FORMAT)
    ))
}

/// Course schedule create/update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CourseScheduleRequest {
    /// Date the course takes place
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub course_date: NaiveDate,
    /// Start time (inclusive)
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    /// End time (exclusive)
    #[schema(value_type = String, example = "10:00:00")]
    pub end_time: NaiveTime,
    /// Id of a user with the TRAINER role
    #[validate(range(min = 1, message = "trainer_id must be a positive id"))]
    #[schema(example = 1)]
    pub trainer_id: i64,
    /// Id of the scheduled course
    #[validate(range(min = 1, message = "course_id must be a positive id"))]
    #[schema(example = 1)]
    pub course_id: i64,
}

impl CourseScheduleRequest {
    /// Validated interval of this request
    pub fn time_slot(&self) -> AppResult<TimeSlot> {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// Course schedule response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseScheduleResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub course_date: NaiveDate,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "10:00:00")]
    pub end_time: NaiveTime,
    #[schema(example = 1)]
    pub trainer_id: i64,
    #[schema(example = 1)]
    pub course_id: i64,
}

impl From<CourseSchedule> for CourseScheduleResponse {
    fn from(schedule: CourseSchedule) -> Self {
        Self {
            id: schedule.id,
            course_date: schedule.course_date,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            trainer_id: schedule.trainer_id,
            course_id: schedule.course_id,
        }
    }
}
