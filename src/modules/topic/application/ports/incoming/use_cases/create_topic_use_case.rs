use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::{Topic, TOPIC_TEXT_MAX_LENGTH};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    owner: UserId,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text must not exceed 200 characters")]
    TextTooLong,
}

impl CreateTopicCommand {
    pub fn new(owner: UserId, text: String) -> Result<Self, CreateTopicCommandError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(CreateTopicCommandError::EmptyText);
        }

        if text.chars().count() > TOPIC_TEXT_MAX_LENGTH {
            return Err(CreateTopicCommandError::TextTooLong);
        }

        Ok(Self {
            owner,
            text: text.to_string(),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn trims_text() {
        let command = CreateTopicCommand::new(owner(), "  Chess \n".to_string()).unwrap();
        assert_eq!(command.text(), "Chess");
    }

    #[test]
    fn whitespace_only_is_empty() {
        let err = CreateTopicCommand::new(owner(), " \t ".to_string()).unwrap_err();
        assert_eq!(err, CreateTopicCommandError::EmptyText);
    }

    #[test]
    fn accepts_exactly_200_characters() {
        let text = "é".repeat(200);
        assert!(CreateTopicCommand::new(owner(), text).is_ok());
    }

    #[test]
    fn rejects_201_characters() {
        let err = CreateTopicCommand::new(owner(), "a".repeat(201)).unwrap_err();
        assert_eq!(err, CreateTopicCommandError::TextTooLong);
    }

    #[test]
    fn keeps_owner() {
        let owner = owner();
        let command = CreateTopicCommand::new(owner, "Chess".to_string()).unwrap();
        assert_eq!(command.owner(), owner);
    }
}
