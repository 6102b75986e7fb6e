use std::sync::Arc;

use crate::infrastructure::db::memory::ClientStoreMemory;
use crate::infrastructure::db::repositories::client_repository::ClientRepository;

#[derive(Clone)]
pub struct Repositories {
    pub client: Arc<ClientRepository>,
}

impl Repositories {
    /// Build all repositories backed by in-process stores.
    pub fn in_memory() -> Self {
        let client_store = Arc::new(ClientStoreMemory::new());

        Self {
            client: Arc::new(ClientRepository::new(client_store)),
        }
    }
}
