// Use case: get_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
use thiserror::Error;

/// Fetches a single client by ID.
pub struct GetClientUseCase;

#[derive(Debug, Error)]
pub enum GetClientError {
    #[error("client not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] ClientRepositoryError),
}

impl GetClientUseCase {
    pub async fn execute(ctx: &AppContext, client_id: ClientId) -> Result<Client, GetClientError> {
        ctx.repos
            .client
            .get(client_id)
            .await?
            .ok_or(GetClientError::NotFound)
    }
}
