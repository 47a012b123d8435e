use sea_orm::entity::prelude::*;

/// A dated lesson slot of a teaching assignment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub schedule_id: i32,
    pub teaching_assignment_id: i32,
    pub date: Date,
    pub lesson_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teaching_assignment::Entity",
        from = "Column::TeachingAssignmentId",
        to = "super::teaching_assignment::Column::TeachingAssignmentId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeachingAssignment,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::teaching_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachingAssignment.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
