use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, EditEntryUseCase, GetEntryForEditUseCase,
};
use crate::tests::support::auth_helper::StubTokenProvider;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    get_topics: Arc<dyn GetTopicsUseCase + Send + Sync>,
    get_topic: Arc<dyn GetTopicUseCase + Send + Sync>,
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    create_entry: Arc<dyn CreateEntryUseCase + Send + Sync>,
    get_entry_for_edit: Arc<dyn GetEntryForEditUseCase + Send + Sync>,
    edit_entry: Arc<dyn EditEntryUseCase + Send + Sync>,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        Arc::new(StubTokenProvider::access(Uuid::new_v4())),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            get_topics: Arc::new(StubGetTopicsUseCase::success(vec![])),
            get_topic: Arc::new(StubGetTopicUseCase),
            create_topic: Arc::new(StubCreateTopicUseCase),
            delete_topic: Arc::new(StubDeleteTopicUseCase),
            create_entry: Arc::new(StubCreateEntryUseCase),
            get_entry_for_edit: Arc::new(StubGetEntryForEditUseCase),
            edit_entry: Arc::new(StubEditEntryUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.get_topic = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Arc::new(uc);
        self
    }

    pub fn with_create_entry(
        mut self,
        uc: impl CreateEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_entry = Arc::new(uc);
        self
    }

    pub fn with_get_entry_for_edit(
        mut self,
        uc: impl GetEntryForEditUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_entry_for_edit = Arc::new(uc);
        self
    }

    pub fn with_edit_entry(mut self, uc: impl EditEntryUseCase + Send + Sync + 'static) -> Self {
        self.edit_entry = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            refresh_token_use_case: self.refresh_token,
            get_topics_use_case: self.get_topics,
            get_topic_use_case: self.get_topic,
            create_topic_use_case: self.create_topic,
            delete_topic_use_case: self.delete_topic,
            create_entry_use_case: self.create_entry,
            get_entry_for_edit_use_case: self.get_entry_for_edit,
            edit_entry_use_case: self.edit_entry,
        })
    }
}
