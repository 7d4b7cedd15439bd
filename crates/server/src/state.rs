use sea_orm::DatabaseConnection;

/// Shared router state. The connection is a pool handle; each store call
/// borrows a pooled connection and returns it when the call completes.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
