//! Course schedule service - Assigns trainers to courses without double-booking.
//!
//! Every write runs the same pipeline: validate the time slot, scan the
//! trainer's schedules for that date, resolve the trainer (must hold the
//! TRAINER role) and the course, then persist.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::{
    conflict_error, find_conflict, Course, CourseScheduleRequest, CourseScheduleResponse,
    NewCourseSchedule, TimeSlot, User,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

const SCHEDULE: &str = "CourseSchedule";
const TRAINER: &str = "Trainer";
const COURSE: &str = "Course";

/// Course schedule service trait for dependency injection.
#[async_trait]
pub trait CourseScheduleService: Send + Sync {
    /// Create a schedule after conflict, trainer and course checks
    async fn create_schedule(&self, request: CourseScheduleRequest) -> AppResult<CourseScheduleResponse>;

    /// Replace every field of an existing schedule, re-running all checks
    async fn update_schedule(
        &self,
        id: i64,
        request: CourseScheduleRequest,
    ) -> AppResult<CourseScheduleResponse>;

    /// List all schedules
    async fn list_schedules(&self) -> AppResult<Vec<CourseScheduleResponse>>;

    /// Get schedule by ID
    async fn get_schedule(&self, id: i64) -> AppResult<CourseScheduleResponse>;

    /// Delete schedule by ID
    async fn delete_schedule(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of CourseScheduleService using Unit of Work.
pub struct CourseScheduleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseScheduleManager<U> {
    /// Create new course schedule service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Fail if `slot` overlaps any schedule of the trainer on `course_date`.
    async fn ensure_no_conflict(
        &self,
        course_date: NaiveDate,
        slot: &TimeSlot,
        trainer_id: i64,
        exclude_id: Option<i64>,
    ) -> AppResult<()> {
        let existing = self
            .uow
            .course_schedules()
            .find_by_date_and_trainer(course_date, trainer_id)
            .await?;

        tracing::debug!(
            trainer_id,
            %course_date,
            existing = existing.len(),
            "Checking trainer schedule conflicts"
        );

        match find_conflict(slot, &existing, exclude_id) {
            Some(conflicting) => {
                tracing::warn!(
                    trainer_id,
                    %course_date,
                    conflicting_id = conflicting.id,
                    "Rejected overlapping course schedule"
                );
                Err(conflict_error(conflicting))
            }
            None => Ok(()),
        }
    }

    async fn resolve_trainer(&self, trainer_id: i64) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_id(trainer_id)
            .await?
            .ok_or_not_found(TRAINER, trainer_id)?;

        if !user.is_trainer() {
            return Err(AppError::invalid_argument(
                "Only users with TRAINER role can schedule course.",
            ));
        }

        Ok(user)
    }

    async fn resolve_course(&self, course_id: i64) -> AppResult<Course> {
        self.uow
            .courses()
            .find_by_id(course_id)
            .await?
            .ok_or_not_found(COURSE, course_id)
    }
}

#[async_trait]
impl<U: UnitOfWork> CourseScheduleService for CourseScheduleManager<U> {
    async fn create_schedule(&self, request: CourseScheduleRequest) -> AppResult<CourseScheduleResponse> {
        let slot = request.time_slot()?;
        self.ensure_no_conflict(request.course_date, &slot, request.trainer_id, None)
            .await?;

        let trainer = self.resolve_trainer(request.trainer_id).await?;
        let course = self.resolve_course(request.course_id).await?;

        let schedule = self
            .uow
            .course_schedules()
            .insert(NewCourseSchedule::new(request.course_date, slot, trainer.id, course.id))
            .await?;

        tracing::info!(
            schedule_id = schedule.id,
            trainer_id = schedule.trainer_id,
            course_id = schedule.course_id,
            "Course schedule created"
        );

        Ok(CourseScheduleResponse::from(schedule))
    }

    async fn update_schedule(
        &self,
        id: i64,
        request: CourseScheduleRequest,
    ) -> AppResult<CourseScheduleResponse> {
        let mut schedule = self
            .uow
            .course_schedules()
            .find_by_id(id)
            .await?
            .ok_or_not_found(SCHEDULE, id)?;

        let slot = request.time_slot()?;
        // The schedule's own current interval must not count as a conflict
        self.ensure_no_conflict(request.course_date, &slot, request.trainer_id, Some(id))
            .await?;

        let trainer = self.resolve_trainer(request.trainer_id).await?;
        let course = self.resolve_course(request.course_id).await?;

        schedule.reschedule(request.course_date, slot, trainer.id, course.id);
        let updated = self.uow.course_schedules().update(schedule).await?;

        tracing::info!(schedule_id = updated.id, "Course schedule updated");

        Ok(CourseScheduleResponse::from(updated))
    }

    async fn list_schedules(&self) -> AppResult<Vec<CourseScheduleResponse>> {
        let schedules = self.uow.course_schedules().find_all().await?;
        Ok(schedules.into_iter().map(CourseScheduleResponse::from).collect())
    }

    async fn get_schedule(&self, id: i64) -> AppResult<CourseScheduleResponse> {
        self.uow
            .course_schedules()
            .find_by_id(id)
            .await?
            .map(CourseScheduleResponse::from)
            .ok_or_not_found(SCHEDULE, id)
    }

    async fn delete_schedule(&self, id: i64) -> AppResult<()> {
        let repo = self.uow.course_schedules();
        let schedule = repo.find_by_id(id).await?.ok_or_not_found(SCHEDULE, id)?;

        repo.delete(schedule.id).await?;
        tracing::info!(schedule_id = id, "Course schedule deleted");
        Ok(())
    }
}
