//! Service layer: credential hashing, session tokens, message persistence,
//! upload storage, room fan-out.

pub mod auth;
pub mod message;
pub mod password;
pub mod room;
pub mod session;
pub mod upload;
