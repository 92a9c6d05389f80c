mod create_entry_use_case;
mod edit_entry_use_case;
mod get_entry_for_edit_use_case;

pub use create_entry_use_case::{CreateEntryError, CreateEntryRequest, CreateEntryUseCase};
pub use edit_entry_use_case::{EditEntryError, EditEntryRequest, EditEntryUseCase};
pub use get_entry_for_edit_use_case::{
    EntryEditView, GetEntryForEditError, GetEntryForEditUseCase,
};
