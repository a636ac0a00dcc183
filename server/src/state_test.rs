use super::*;

#[test]
fn room_state_starts_empty() {
    let room = RoomState::new();
    assert!(room.clients.is_empty());
}

#[tokio::test]
async fn clients_register_and_deregister() {
    let mut room = RoomState::new();
    let conn_id = Uuid::new_v4();
    let (tx, _rx) = mpsc::channel(1);

    room.clients.insert(conn_id, tx);
    assert_eq!(room.clients.len(), 1);

    room.clients.remove(&conn_id);
    assert!(room.clients.is_empty());
}
