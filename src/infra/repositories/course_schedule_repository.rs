//! Course schedule repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, RuntimeErr, Set,
};

use super::entities::course_schedule::{self, ActiveModel, Entity as CourseScheduleEntity};
use crate::config::SCHEDULE_OVERLAP_CONSTRAINT;
use crate::domain::{CourseSchedule, NewCourseSchedule};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY_NAME: &str = "CourseSchedule";

/// PostgreSQL SQLSTATE for `exclusion_violation`
const EXCLUSION_VIOLATION: &str = "23P01";

/// Course schedule repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseScheduleRepository: Send + Sync {
    /// Find schedule by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<CourseSchedule>>;

    /// List all schedules in storage order
    async fn find_all(&self) -> AppResult<Vec<CourseSchedule>>;

    /// List schedules of one trainer on one date, ordered by start time
    async fn find_by_date_and_trainer(
        &self,
        course_date: NaiveDate,
        trainer_id: i64,
    ) -> AppResult<Vec<CourseSchedule>>;

    /// Insert a new schedule
    async fn insert(&self, schedule: NewCourseSchedule) -> AppResult<CourseSchedule>;

    /// Overwrite all fields of an existing schedule
    async fn update(&self, schedule: CourseSchedule) -> AppResult<CourseSchedule>;

    /// Delete schedule by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM implementation of CourseScheduleRepository
pub struct CourseScheduleStore {
    db: DatabaseConnection,
}

impl CourseScheduleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// True when the driver reports the trainer overlap exclusion constraint.
fn is_overlap_violation(err: &DbErr) -> bool {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return false,
    };

    let RuntimeErr::SqlxError(sqlx_err) = runtime else {
        return false;
    };

    sqlx_err.as_database_error().map_or(false, |db_err| {
        db_err.code().as_deref() == Some(EXCLUSION_VIOLATION)
            && db_err.constraint() == Some(SCHEDULE_OVERLAP_CONSTRAINT)
    })
}

/// Translate write failures, surfacing the storage-level overlap guard as a
/// scheduling conflict instead of a generic database error.
fn map_write_error(err: DbErr) -> AppError {
    if is_overlap_violation(&err) {
        tracing::warn!("Schedule write rejected by overlap constraint");
        return AppError::invalid_argument(
            "Time conflict detected: Trainer already has a course scheduled in the requested time range",
        );
    }
    AppError::from(err)
}

#[async_trait]
impl CourseScheduleRepository for CourseScheduleStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<CourseSchedule>> {
        let result = CourseScheduleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(CourseSchedule::from))
    }

    async fn find_all(&self) -> AppResult<Vec<CourseSchedule>> {
        let models = CourseScheduleEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CourseSchedule::from).collect())
    }

    async fn find_by_date_and_trainer(
        &self,
        course_date: NaiveDate,
        trainer_id: i64,
    ) -> AppResult<Vec<CourseSchedule>> {
        let models = CourseScheduleEntity::find()
            .filter(course_schedule::Column::CourseDate.eq(course_date))
            .filter(course_schedule::Column::TrainerId.eq(trainer_id))
            .order_by_asc(course_schedule::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CourseSchedule::from).collect())
    }

    async fn insert(&self, schedule: NewCourseSchedule) -> AppResult<CourseSchedule> {
        let active_model = ActiveModel {
            course_date: Set(schedule.course_date),
            start_time: Set(schedule.start_time),
            end_time: Set(schedule.end_time),
            trainer_id: Set(schedule.trainer_id),
            course_id: Set(schedule.course_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_error)?;
        Ok(CourseSchedule::from(model))
    }

    async fn update(&self, schedule: CourseSchedule) -> AppResult<CourseSchedule> {
        let id = schedule.id;
        let active_model = ActiveModel {
            id: Set(id),
            course_date: Set(schedule.course_date),
            start_time: Set(schedule.start_time),
            end_time: Set(schedule.end_time),
            trainer_id: Set(schedule.trainer_id),
            course_id: Set(schedule.course_id),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(CourseSchedule::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::not_found(ENTITY_NAME, id)),
            Err(e) => Err(map_write_error(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = CourseScheduleEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_NAME, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;

    /// Driver error carrying a SQLSTATE and constraint name, as Postgres reports them
    #[derive(Debug, thiserror::Error)]
    #[error("conflicting key value violates exclusion constraint")]
    struct PgError {
        code: &'static str,
        constraint: &'static str,
    }

    impl DatabaseError for PgError {
        fn message(&self) -> &str {
            "conflicting key value violates exclusion constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn driver_error(code: &'static str, constraint: &'static str) -> DbErr {
        DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(Box::new(
            PgError { code, constraint },
        ))))
    }

    #[test]
    fn exclusion_violation_on_overlap_constraint_becomes_invalid_argument() {
        let err = driver_error(EXCLUSION_VIOLATION, SCHEDULE_OVERLAP_CONSTRAINT);
        assert!(matches!(map_write_error(err), AppError::InvalidArgument(_)));
    }

    #[test]
    fn other_constraints_and_codes_stay_database_errors() {
        let foreign_key = driver_error("23503", "fk_course_schedules_course");
        assert!(matches!(map_write_error(foreign_key), AppError::Database(_)));

        let other_exclusion = driver_error(EXCLUSION_VIOLATION, "some_other_constraint");
        assert!(matches!(map_write_error(other_exclusion), AppError::Database(_)));
    }

    #[test]
    fn message_text_alone_is_not_trusted() {
        let err = DbErr::Exec(RuntimeErr::Internal(format!(
            "violates exclusion constraint \"{}\"",
            SCHEDULE_OVERLAP_CONSTRAINT
        )));
        assert!(matches!(map_write_error(err), AppError::Database(_)));
    }
}
