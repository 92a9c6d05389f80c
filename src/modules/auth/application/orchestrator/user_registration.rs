use std::sync::Arc;

use tracing::info;

use crate::auth::application::{
    ports::outgoing::TokenProvider,
    use_cases::{
        create_user::{CreateUserCommand, CreateUserError, ICreateUserUseCase},
        login_user::{LoginUserResponse, UserInfo},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

/// Registration followed by an immediate login: a new account leaves with
/// its token pair.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            token_provider,
        }
    }

    pub async fn register_user(
        &self,
        command: CreateUserCommand,
    ) -> Result<LoginUserResponse, UserRegistrationError> {
        let user = self.create_user_use_case.execute(command).await?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.is_staff)
            .map_err(|e| UserRegistrationError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.is_staff)
            .map_err(|e| UserRegistrationError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "Registered user logged in");

        Ok(LoginUserResponse {
            access_token,
            refresh_token,
            user: UserInfo {
                id: user.id,
                username: user.username,
                is_staff: user.is_staff,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::tests::support::auth_helper::StubTokenProvider;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct StubCreateUser {
        result: Result<User, CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for StubCreateUser {
        async fn execute(&self, _command: CreateUserCommand) -> Result<User, CreateUserError> {
            self.result.clone()
        }
    }

    fn command() -> CreateUserCommand {
        CreateUserCommand::new(
            "ada".to_string(),
            "analytical engine".to_string(),
            "analytical engine".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn registration_returns_token_pair() {
        let user_id = Uuid::new_v4();
        let user = User {
            id: user_id,
            username: "ada".to_string(),
            password_hash: "hash".to_string(),
            is_staff: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let orchestrator = UserRegistrationOrchestrator::new(
            Arc::new(StubCreateUser { result: Ok(user) }),
            Arc::new(StubTokenProvider::access(user_id)),
        );

        let response = orchestrator.register_user(command()).await.unwrap();

        assert_eq!(response.user.id, user_id);
        assert_eq!(response.access_token, format!("access-{user_id}"));
        assert_eq!(response.refresh_token, format!("refresh-{user_id}"));
    }

    #[tokio::test]
    async fn creation_failure_is_propagated() {
        let orchestrator = UserRegistrationOrchestrator::new(
            Arc::new(StubCreateUser {
                result: Err(CreateUserError::UsernameTaken),
            }),
            Arc::new(StubTokenProvider::access(Uuid::new_v4())),
        );

        let result = orchestrator.register_user(command()).await;

        assert!(matches!(
            result,
            Err(UserRegistrationError::CreateUserFailed(
                CreateUserError::UsernameTaken
            ))
        ));
    }
}
