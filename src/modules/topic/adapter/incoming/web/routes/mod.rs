pub mod create_topic;
pub mod delete_topic;
pub mod get_topic;
pub mod get_topics;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use get_topic::get_topic_handler;
pub use get_topics::get_topics_handler;
