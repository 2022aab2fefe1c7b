//! Migration: Create course_schedules table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_courses_table::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseSchedules::CourseDate).date().not_null())
                    .col(ColumnDef::new(CourseSchedules::StartTime).time().not_null())
                    .col(ColumnDef::new(CourseSchedules::EndTime).time().not_null())
                    .col(ColumnDef::new(CourseSchedules::TrainerId).big_integer().not_null())
                    .col(ColumnDef::new(CourseSchedules::CourseId).big_integer().not_null())
                    .check(
                        Expr::col(CourseSchedules::StartTime)
                            .lt(Expr::col(CourseSchedules::EndTime)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_schedules_trainer")
                            .from(CourseSchedules::Table, CourseSchedules::TrainerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_schedules_course")
                            .from(CourseSchedules::Table, CourseSchedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict lookups always filter on (trainer, date)
        manager
            .create_index(
                Index::create()
                    .name("idx_course_schedules_trainer_date")
                    .table(CourseSchedules::Table)
                    .col(CourseSchedules::TrainerId)
                    .col(CourseSchedules::CourseDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseSchedules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum CourseSchedules {
    Table,
    Id,
    CourseDate,
    StartTime,
    EndTime,
    TrainerId,
    CourseId,
}
