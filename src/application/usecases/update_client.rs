// Use case: update_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::{Client, ClientError};
use crate::domain::entities::health_problem::HealthProblem;
use crate::domain::value_objects::birth_date::BirthDate;
use crate::domain::value_objects::ids::ClientId;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
use metrics::counter;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub health_problems: Option<Vec<HealthProblem>>,
}

/// Applies a partial update to an existing client.
pub struct UpdateClientUseCase;

#[derive(Debug, Error)]
pub enum UpdateClientError {
    #[error("client not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ClientError),

    #[error("storage error: {0}")]
    Storage(#[from] ClientRepositoryError),
}

impl UpdateClientUseCase {
    /// Apply the supplied fields to the stored client and persist the result.
    ///
    /// Nothing is written when any supplied field is rejected.
    #[instrument(skip(ctx, request))]
    pub async fn execute(
        ctx: &AppContext,
        client_id: ClientId,
        request: UpdateClientRequest,
    ) -> Result<Client, UpdateClientError> {
        // Step 1: Load the current client.
        let mut client = ctx
            .repos
            .client
            .get(client_id)
            .await?
            .ok_or(UpdateClientError::NotFound)?;

        // Step 2: Apply supplied fields through the entity's mutators.
        if let Some(name) = request.name {
            client.set_name(name);
        }
        if let Some(birth_date) = request.birth_date.as_deref() {
            client.set_birth_date(BirthDate::parse(birth_date));
        }
        if let Some(gender) = request.gender {
            client.set_gender(gender)?;
        }
        if let Some(health_problems) = request.health_problems {
            client.set_health_problems(Some(health_problems))?;
        }
        client.set_updated_at(Timestamp::now_utc());

        // Step 3: Persist and report.
        let stored = ctx.repos.client.update(&client).await?;
        counter!("clients_updated_total").increment(1);
        info!(score = stored.score(), "client_updated");

        Ok(stored)
    }
}
