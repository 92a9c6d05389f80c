use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::User,
    ports::{
        incoming::password_policy::{PasswordPolicy, PasswordPolicyError},
        outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};

pub const USERNAME_MAX_LENGTH: usize = 150;

// ========================= Command =========================

/// Registration form that passed the structural checks: username shape and
/// matching password confirmation. Strength is judged by the use case's
/// [`PasswordPolicy`].
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    username: String,
    password: String,
    is_staff: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must not exceed 150 characters")]
    UsernameTooLong,

    #[error("Username may contain only letters, numbers, and @/./+/-/_ characters")]
    InvalidUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("The two password fields didn't match")]
    PasswordMismatch,
}

impl CreateUserCommand {
    pub fn new(
        username: String,
        password1: String,
        password2: String,
    ) -> Result<Self, CreateUserCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(CreateUserCommandError::EmptyUsername);
        }

        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(CreateUserCommandError::UsernameTooLong);
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(CreateUserCommandError::InvalidUsername);
        }

        if password1.is_empty() {
            return Err(CreateUserCommandError::EmptyPassword);
        }

        if password1 != password2 {
            return Err(CreateUserCommandError::PasswordMismatch);
        }

        Ok(Self {
            username: username.to_string(),
            password: password1,
            is_staff: false,
        })
    }

    /// Mark the account as staff. Only reachable from the operator CLI.
    pub fn as_staff(mut self) -> Self {
        self.is_staff = true;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("A user with that username already exists")]
    UsernameTaken,

    #[error("{0}")]
    WeakPassword(PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        self.password_policy
            .validate(command.username(), command.password())
            .map_err(CreateUserError::WeakPassword)?;

        let existing = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(CreateUserError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // The unique index still wins a race between two registrations.
        let user = self
            .repository
            .create_user(CreateUserData {
                username: command.username().to_string(),
                password_hash,
                is_staff: command.is_staff(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
            })?;

        info!(user_id = %user.id, is_staff = user.is_staff, "User account created");

        Ok(user)
    }
}
