//! Tab management.
//!
//! - `page` wraps one tab's content and hides it while inactive
//! - `registry` maps a tab key to its view
//! - `tab_labels` holds the titles and access rules per key

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{is_admin_only, tab_icon_for_key, tab_label_for_key, HOME_TAB};
