//! Network layer: authenticated HTTP plumbing, REST helpers, DTOs, and the
//! chat WebSocket client.

pub mod api;
pub mod chat_socket;
pub mod http;
pub mod types;
