use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use tracing::debug;
use uuid::Uuid;

use crate::entry::application::{
    domain::entities::{Entry, EntryText},
    ports::outgoing::{CreateEntryData, EntryRepository, EntryRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as EntryActiveModel, Entity as EntryEntity};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> EntryRepositoryError {
    EntryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            text: Set(data.text.into_inner()),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        debug!(entry_id = %inserted.id, topic_id = %inserted.topic_id, "Entry inserted");

        Ok(inserted.into())
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: EntryText,
    ) -> Result<Entry, EntryRepositoryError> {
        let existing = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        let mut active = existing.into_active_model();
        active.text = Set(text.into_inner());

        let updated = active.update(&*self.db).await.map_err(db_error)?;

        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::adapter::outgoing::sea_orm_entity::Model as EntryModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn model(text: &str) -> EntryModel {
        EntryModel {
            id: Uuid::new_v4(),
            topic_id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn create_entry_returns_inserted_row() {
        let inserted = model("Opened with e4.");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();

        let entry = EntryRepositoryPostgres::new(Arc::new(db))
            .create_entry(CreateEntryData {
                topic_id: inserted.topic_id,
                text: EntryText::parse("Opened with e4.").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(entry.id, inserted.id);
        assert_eq!(entry.topic_id, inserted.topic_id);
    }

    #[tokio::test]
    async fn update_text_keeps_topic_and_created_at() {
        let existing = model("Opened with e4.");
        let updated = EntryModel {
            text: "Opened with d4.".to_string(),
            ..existing.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()], vec![updated.clone()]])
            .into_connection();

        let entry = EntryRepositoryPostgres::new(Arc::new(db))
            .update_text(existing.id, EntryText::parse("Opened with d4.").unwrap())
            .await
            .unwrap();

        assert_eq!(entry.text, "Opened with d4.");
        assert_eq!(entry.topic_id, existing.topic_id);
        assert_eq!(entry.created_at, Entry::from(existing).created_at);
    }

    #[tokio::test]
    async fn update_text_on_missing_entry_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<EntryModel>::new()])
            .into_connection();

        let result = EntryRepositoryPostgres::new(Arc::new(db))
            .update_text(Uuid::new_v4(), EntryText::parse("anything").unwrap())
            .await;

        assert!(matches!(result, Err(EntryRepositoryError::EntryNotFound)));
    }

    #[tokio::test]
    async fn insert_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("foreign key violation".to_string())])
            .into_connection();

        let result = EntryRepositoryPostgres::new(Arc::new(db))
            .create_entry(CreateEntryData {
                topic_id: Uuid::new_v4(),
                text: EntryText::parse("orphan").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(EntryRepositoryError::DatabaseError(_))));
    }
}
