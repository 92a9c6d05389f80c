//! Per-user access control for topics and, through their topic, entries.
//!
//! A denied request is reported to the caller exactly like a missing one,
//! so other users' ids cannot be discovered.

use tracing::warn;

use super::entities::Topic;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allowed
    }
}

/// Only the owner may access a topic. Entries are evaluated against the
/// topic they belong to.
pub fn authorize(topic: &Topic, requester: UserId) -> Access {
    if topic.owner == requester {
        Access::Allowed
    } else {
        Access::Denied
    }
}

/// Collapses "absent" and "not yours" into the same `None`.
pub fn visible_to(topic: Option<Topic>, requester: UserId) -> Option<Topic> {
    let topic = topic?;

    match authorize(&topic, requester) {
        Access::Allowed => Some(topic),
        Access::Denied => {
            warn!(
                topic_id = %topic.id,
                owner_id = %topic.owner,
                requester_id = %requester,
                "Ownership check denied access"
            );
            None
        }
    }
}
