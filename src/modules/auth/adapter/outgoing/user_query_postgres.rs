use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::User,
    ports::outgoing::{UserQuery, UserQueryError},
};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn user_model(id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            username: "ada".to_string(),
            password_hash: "hashed_password".to_string(),
            is_staff: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_user() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(user_id)]])
            .into_connection();

        let user = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(user_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "ada");
        assert!(!user.is_staff);
    }

    #[tokio::test]
    async fn find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_username("nobody")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection lost".to_string())])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_username("ada")
            .await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }
}
