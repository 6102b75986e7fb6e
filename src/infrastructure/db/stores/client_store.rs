use crate::infrastructure::db::dto::ClientRow;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRepositoryError {
    #[error("client not found")]
    NotFound,

    #[error("client already exists")]
    Conflict,

    #[error("invalid client data")]
    InvalidInput,

    #[error("client storage unavailable")]
    StorageUnavailable,
}

/// Persistence port for clients. Implementations own identifier assignment.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, client_id: uuid::Uuid) -> Result<Option<ClientRow>, ClientRepositoryError>;
    /// Store a new client, assigning an ID when the row has none, and return what was stored.
    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Replace an existing client and return what was stored.
    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Delete a client by its ID. Returns an error if it doesn't exist.
    async fn delete(&self, client_id: uuid::Uuid) -> Result<(), ClientRepositoryError>;
}
