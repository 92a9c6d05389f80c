use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::User,
    ports::outgoing::{CreateUserData, UserRepository, UserRepositoryError},
};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            is_staff: Set(data.is_staff),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(User::from(inserted))
    }
}
