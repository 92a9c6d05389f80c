use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const PREVIEW_LENGTH: usize = 50;

/// A note under a topic. Ownership is the topic's owner; there is no owner
/// field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// First 50 characters, with `...` appended when the text was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(PREVIEW_LENGTH).collect();

        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preview())
    }
}

/// Entry text after validation: trimmed and non-empty. No upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryText(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryTextError {
    #[error("Text cannot be empty")]
    EmptyText,
}

impl EntryText {
    pub fn parse(raw: &str) -> Result<Self, EntryTextError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(EntryTextError::EmptyText);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
