pub mod create_entry;
pub mod edit_entry;
pub mod get_entry_for_edit;

pub use create_entry::create_entry_handler;
pub use edit_entry::edit_entry_handler;
pub use get_entry_for_edit::get_entry_for_edit_handler;
