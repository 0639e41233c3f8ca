pub mod confirm_dialog;
pub mod form_modal;
pub mod page_header;
pub mod pagination_controls;
pub mod period_selector;
pub mod search_bar;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use form_modal::{FormField, FormModal, FormSelect};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use period_selector::PeriodSelector;
pub use search_bar::SearchBar;
