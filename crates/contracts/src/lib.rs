//! DTOs exchanged between the admin dashboard and the shop backend.
//!
//! The backend speaks camelCase JSON and some collections still carry the
//! Mongo-style `_id`, so every id field accepts both spellings.

pub mod domain;
pub mod system;
