//! Default use cases for `TestAppStateBuilder`. Each answers the way an
//! empty system would, so a route test only overrides what it exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::use_cases::{
    create_user::{CreateUserCommand, CreateUserError, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::{ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse},
    refresh_token::{
        IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
    },
};
use crate::entry::application::{
    domain::entities::Entry,
    ports::incoming::use_cases::{
        CreateEntryError, CreateEntryRequest, CreateEntryUseCase, EditEntryError,
        EditEntryRequest, EditEntryUseCase, EntryEditView, GetEntryForEditError,
        GetEntryForEditUseCase,
    },
};
use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
        DeleteTopicUseCase, GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase,
        TopicView,
    },
};

// ========================= Auth =========================

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<User, CreateUserError> {
        Err(CreateUserError::UsernameTaken)
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
            revoked: 0,
        })
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

// ========================= Topics =========================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(topics: Vec<Topic>) -> Self {
        Self { result: Ok(topics) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

pub struct StubGetTopicUseCase;

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
        _requester: UserId,
    ) -> Result<TopicView, GetTopicError> {
        Err(GetTopicError::TopicNotFound)
    }
}

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        Ok(Topic {
            id: Uuid::new_v4(),
            owner: command.owner(),
            text: command.text().to_string(),
            created_at: chrono::Utc::now(),
        })
    }
}

pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        Err(DeleteTopicError::TopicNotFound)
    }
}

// ========================= Entries =========================

pub struct StubCreateEntryUseCase;

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, _request: CreateEntryRequest) -> Result<Entry, CreateEntryError> {
        Err(CreateEntryError::TopicNotFound)
    }
}

pub struct StubGetEntryForEditUseCase;

#[async_trait]
impl GetEntryForEditUseCase for StubGetEntryForEditUseCase {
    async fn execute(
        &self,
        _entry_id: Uuid,
        _requester: UserId,
    ) -> Result<EntryEditView, GetEntryForEditError> {
        Err(GetEntryForEditError::EntryNotFound)
    }
}

pub struct StubEditEntryUseCase;

#[async_trait]
impl EditEntryUseCase for StubEditEntryUseCase {
    async fn execute(&self, _request: EditEntryRequest) -> Result<Entry, EditEntryError> {
        Err(EditEntryError::EntryNotFound)
    }
}
