use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::{
    domain::entities::{Entry, EntryText},
    ports::outgoing::{
        CreateEntryData, EntryQuery, EntryQueryError, EntryRepository, EntryRepositoryError,
    },
};
use crate::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{
        CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    },
};

#[derive(Default)]
struct State {
    topics: Vec<Topic>,
    entries: Vec<Entry>,
    clock: i64,
}

impl State {
    // Strictly increasing timestamps keep ordering assertions deterministic
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
            + Duration::seconds(self.clock)
    }
}

/// One store standing in for all four topic/entry ports, so a test can
/// observe what a service persisted.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn add_topic(&self, owner: UserId, text: &str) -> Topic {
        let mut state = self.state.lock().unwrap();
        let topic = Topic {
            id: Uuid::new_v4(),
            owner,
            text: text.to_string(),
            created_at: state.tick(),
        };
        state.topics.push(topic.clone());
        topic
    }

    pub fn add_entry(&self, topic_id: Uuid, text: &str) -> Entry {
        let mut state = self.state.lock().unwrap();
        let entry = Entry {
            id: Uuid::new_v4(),
            topic_id,
            text: text.to_string(),
            created_at: state.tick(),
        };
        state.entries.push(entry.clone());
        entry
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.state.lock().unwrap().topics.clone()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.state.lock().unwrap().entries.clone()
    }
}

#[async_trait]
impl TopicQuery for InMemoryStore {
    async fn get_topics(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError> {
        let mut topics: Vec<Topic> = self
            .topics()
            .into_iter()
            .filter(|t| t.owner == owner)
            .collect();
        topics.sort_by_key(|t| t.created_at);
        Ok(topics)
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self.topics().into_iter().find(|t| t.id == topic_id))
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        Ok(self.add_topic(data.owner, &data.text))
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.topics.len();
        state.topics.retain(|t| t.id != topic_id);

        if state.topics.len() == before {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        state.entries.retain(|e| e.topic_id != topic_id);
        Ok(())
    }
}

#[async_trait]
impl EntryQuery for InMemoryStore {
    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError> {
        Ok(self.entries().into_iter().find(|e| e.id == entry_id))
    }

    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError> {
        let mut entries: Vec<Entry> = self
            .entries()
            .into_iter()
            .filter(|e| e.topic_id == topic_id)
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.created_at));
        Ok(entries)
    }
}

#[async_trait]
impl EntryRepository for InMemoryStore {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        Ok(self.add_entry(data.topic_id, data.text.as_str()))
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: EntryText,
    ) -> Result<Entry, EntryRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let entry = state
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        entry.text = text.into_inner();
        Ok(entry.clone())
    }
}
