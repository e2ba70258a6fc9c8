use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: String,
    pub date: DateTimeUtc,
    pub instructor_uid: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_attendee::Entity")]
    ClassAttendee,
}

impl Related<super::class_attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassAttendee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
