//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `groups`, `chat`) so individual pages
//! can depend on small focused models.

pub mod auth;
pub mod chat;
pub mod groups;
