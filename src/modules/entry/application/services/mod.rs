mod create_entry_service;
mod edit_entry_service;
mod get_entry_for_edit_service;
mod owned_entry;

pub use create_entry_service::CreateEntryService;
pub use edit_entry_service::EditEntryService;
pub use get_entry_for_edit_service::GetEntryForEditService;
