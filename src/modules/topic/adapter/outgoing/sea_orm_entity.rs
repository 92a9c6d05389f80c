use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub text: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: self.id,
            owner: UserId::from(self.user_id),
            text: self.text.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "crate::modules::entry::adapter::outgoing::sea_orm_entity::Entity")]
    Entries,
}

impl Related<crate::modules::entry::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
