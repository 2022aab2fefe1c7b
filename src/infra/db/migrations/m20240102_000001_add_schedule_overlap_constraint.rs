//! Migration: Forbid overlapping schedules of one trainer at the storage layer.
//!
//! The application checks for conflicts before writing, but two concurrent
//! requests can both pass that check. On PostgreSQL an exclusion constraint
//! over `(trainer_id, course_date, [start_time, end_time))` rejects the second
//! write. Other backends rely on the application-level check only.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use crate::config::SCHEDULE_OVERLAP_CONSTRAINT;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        let db = manager.get_connection();
        db.execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist")
            .await?;
        db.execute_unprepared(&format!(
            "ALTER TABLE course_schedules ADD CONSTRAINT {} EXCLUDE USING gist (\
                trainer_id WITH =, \
                course_date WITH =, \
                tsrange(course_date + start_time, course_date + end_time, '[)') WITH &&\
            )",
            SCHEDULE_OVERLAP_CONSTRAINT
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        manager
            .get_connection()
            .execute_unprepared(&format!(
                "ALTER TABLE course_schedules DROP CONSTRAINT IF EXISTS {}",
                SCHEDULE_OVERLAP_CONSTRAINT
            ))
            .await?;

        Ok(())
    }
}
