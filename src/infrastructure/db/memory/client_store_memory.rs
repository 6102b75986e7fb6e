use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

/// In-process client store. Nothing survives the process.
#[derive(Default)]
pub struct ClientStoreMemory {
    rows: Mutex<HashMap<Uuid, ClientRow>>,
}

impl ClientStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<MutexGuard<'_, HashMap<Uuid, ClientRow>>, ClientRepositoryError> {
        self.rows
            .lock()
            .map_err(|_| ClientRepositoryError::StorageUnavailable)
    }
}

#[async_trait]
impl ClientStore for ClientStoreMemory {
    async fn get(&self, client_id: Uuid) -> Result<Option<ClientRow>, ClientRepositoryError> {
        Ok(self.rows()?.get(&client_id).cloned())
    }

    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let mut rows = self.rows()?;
        let id = row.id.unwrap_or_else(Uuid::new_v4);
        if rows.contains_key(&id) {
            return Err(ClientRepositoryError::Conflict);
        }

        let stored = ClientRow {
            id: Some(id),
            ..row.clone()
        };
        rows.insert(id, stored.clone());
        debug!(client_id = %id, "client_row_inserted");

        Ok(stored)
    }

    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let id = row.id.ok_or(ClientRepositoryError::InvalidInput)?;
        let mut rows = self.rows()?;
        let slot = rows.get_mut(&id).ok_or(ClientRepositoryError::NotFound)?;
        *slot = row.clone();

        Ok(row.clone())
    }

    async fn delete(&self, client_id: Uuid) -> Result<(), ClientRepositoryError> {
        self.rows()?
            .remove(&client_id)
            .map(|_| ())
            .ok_or(ClientRepositoryError::NotFound)
    }
}
