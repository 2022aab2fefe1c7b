//! Course schedule database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::CourseSchedule;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub trainer_id: i64,
    pub course_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TrainerId",
        to = "super::user::Column::Id"
    )]
    Trainer,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CourseSchedule {
    fn from(model: Model) -> Self {
        CourseSchedule {
            id: model.id,
            course_date: model.course_date,
            start_time: model.start_time,
            end_time: model.end_time,
            trainer_id: model.trainer_id,
            course_id: model.course_id,
        }
    }
}
