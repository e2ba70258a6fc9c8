use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    pub name: String,
    pub email: String,
    pub belt: String,
    pub age: i32,
    pub address: String,
    pub education: String,
    pub degrees: i32,
    pub start_date: Date,
    pub photo_url: String,
    pub extra_activities: i32,
    pub total_presences: i32,
    pub last_presence_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::presence::Entity")]
    Presence,
}

impl Related<super::presence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
