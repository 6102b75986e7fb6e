use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use std::sync::Arc;

pub struct ClientRepository {
    store: Arc<dyn ClientStore>,
}

impl ClientRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Persist a new client and return the identifier the store assigned.
    ///
    /// The stored `id`, `created_at` and `updated_at` are written back onto `client`.
    pub async fn save(&self, client: &mut Client) -> Result<ClientId, ClientRepositoryError> {
        let dto = ClientRow::from_client(client);
        let stored = self.store.insert(&dto).await?;
        let id = stored
            .id
            .map(ClientId)
            .ok_or(ClientRepositoryError::StorageUnavailable)?;

        client.set_id(id);
        client.set_created_at(Timestamp::from(stored.created_at));
        client.set_updated_at(Timestamp::from(stored.updated_at));

        Ok(id)
    }

    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    pub async fn get(&self, client_id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        self.store
            .get(client_id.0)
            .await?
            .map(ClientRow::into_client)
            .transpose()
    }

    /// Update a client and return what was actually stored.
    pub async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let dto = ClientRow::from_client(client);
        let stored = self.store.update(&dto).await?;

        stored.into_client()
    }

    /// Delete a client by its ID. Returns an error if it doesn't exist.
    pub async fn delete(&self, client_id: ClientId) -> Result<(), ClientRepositoryError> {
        self.store.delete(client_id.0).await
    }
}
