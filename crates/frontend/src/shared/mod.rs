pub mod api_client;
pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod envelope;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod pagination;
pub mod preferences;
pub mod table_state;
pub mod theme;
