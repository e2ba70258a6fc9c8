use sea_orm::entity::prelude::*;

// Attendee rows are intentionally not unique per (class_id, student_uid):
// a duplicated uid in a marking request produces two rows and two presences.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_attendee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: String,
    pub student_uid: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_session::Entity",
        from = "Column::ClassId",
        to = "super::class_session::Column::ClassId"
    )]
    ClassSession,
}

impl Related<super::class_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
