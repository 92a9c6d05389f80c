use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::{domain::entities::Entry, ports::outgoing::EntryQuery};
use crate::topic::application::{
    domain::{entities::Topic, ownership_policy::visible_to},
    ports::outgoing::TopicQuery,
};

/// Loads an entry together with its topic if `requester` owns that topic.
/// `Ok(None)` covers a missing entry, a dangling topic and a foreign owner.
pub(super) async fn load_owned_entry<E, T>(
    entries: &E,
    topics: &T,
    entry_id: Uuid,
    requester: UserId,
) -> Result<Option<(Entry, Topic)>, String>
where
    E: EntryQuery + Send + Sync,
    T: TopicQuery + Send + Sync,
{
    let Some(entry) = entries
        .find_by_id(entry_id)
        .await
        .map_err(|e| e.to_string())?
    else {
        return Ok(None);
    };

    let topic = topics
        .find_by_id(entry.topic_id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(visible_to(topic, requester).map(|topic| (entry, topic)))
}
