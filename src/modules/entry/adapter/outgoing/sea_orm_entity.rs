use sea_orm::entity::prelude::*;

use crate::entry::application::domain::entities::Entry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub topic_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub created_at: DateTimeWithTimeZone,
}

impl From<Model> for Entry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            topic_id: model.topic_id,
            text: model.text,
            created_at: model.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
