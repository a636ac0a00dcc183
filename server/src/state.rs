//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and a map of live chat rooms. Each room tracks
//! the connected websocket clients so message fan-out never touches the
//! database.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::event::ChatEvent;

/// Per-group live state: connected clients keyed by connection id.
#[derive(Default)]
pub struct RoomState {
    pub clients: HashMap<Uuid, mpsc::Sender<ChatEvent>>,
}

impl RoomState {
    #[must_use]
    pub fn new() -> Self {
        Self { clients: HashMap::new() }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rooms: Arc<RwLock<HashMap<Uuid, RoomState>>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool, rooms: Arc::new(RwLock::new(HashMap::new())) }
    }
}
