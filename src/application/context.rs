use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases.
pub struct AppContext {
    pub repos: Repositories,
}

impl AppContext {
    /// Build a new application context with shared repositories.
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::AppContext;
    use crate::infrastructure::db::dto::ClientRow;
    use crate::infrastructure::db::repositories::Repositories;
    use crate::infrastructure::db::repositories::client_repository::ClientRepository;
    use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
    use async_trait::async_trait;
    use std::sync::Arc;

    #[derive(Clone)]
    pub struct NullClientStore;

    #[async_trait]
    impl ClientStore for NullClientStore {
        async fn get(
            &self,
            _client_id: uuid::Uuid,
        ) -> Result<Option<ClientRow>, ClientRepositoryError> {
            Err(ClientRepositoryError::StorageUnavailable)
        }

        async fn insert(&self, _row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
            Err(ClientRepositoryError::StorageUnavailable)
        }

        async fn update(&self, _row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
            Err(ClientRepositoryError::StorageUnavailable)
        }

        async fn delete(&self, _client_id: uuid::Uuid) -> Result<(), ClientRepositoryError> {
            Err(ClientRepositoryError::StorageUnavailable)
        }
    }

    /// Context whose store rejects everything; tests swap in the store they need.
    pub fn test_context() -> AppContext {
        let repos = Repositories {
            client: Arc::new(ClientRepository::new(Arc::new(NullClientStore))),
        };
        AppContext { repos }
    }

    /// Context with the client repository backed by `store`.
    pub fn context_with_store(store: Arc<dyn ClientStore>) -> AppContext {
        let mut ctx = test_context();
        ctx.repos.client = Arc::new(ClientRepository::new(store));
        ctx
    }
}
