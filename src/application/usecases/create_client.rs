// Use case: create_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::{Client, ClientError, NewClient};
use crate::domain::entities::health_problem::HealthProblem;
use crate::domain::value_objects::birth_date::BirthDate;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
use metrics::counter;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Raw creation request, as received from callers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub name: String,
    pub birth_date: String,
    pub gender: String,
    #[serde(default)]
    pub health_problems: Option<Vec<HealthProblem>>,
}

/// Creates and persists a new client.
pub struct CreateClientUseCase;

#[derive(Debug, Error)]
pub enum CreateClientError {
    #[error(transparent)]
    Invalid(#[from] ClientError),

    #[error("storage error: {0}")]
    Storage(#[from] ClientRepositoryError),
}

impl CreateClientUseCase {
    /// Build a client from the request, save it once and return the assigned identifier.
    #[instrument(skip(ctx, request))]
    pub async fn execute(
        ctx: &AppContext,
        request: CreateClientRequest,
    ) -> Result<ClientId, CreateClientError> {
        let CreateClientRequest {
            name,
            birth_date,
            gender,
            health_problems,
        } = request;

        // Step 1: Parse the birth date. Malformed input is kept as an invalid date.
        let birth_date = BirthDate::parse(&birth_date);

        // Step 2: Build the domain client (validates degrees and computes the score).
        let mut client = Client::new(NewClient::new(name, birth_date, gender, health_problems))
            .inspect_err(|e| {
                counter!("client_validation_failures_total").increment(1);
                warn!(error = %e, "client_rejected");
            })?;

        // Step 3: Persist the client; the store assigns the identifier.
        let client_id = ctx.repos.client.save(&mut client).await?;

        // Step 4: Emit metrics and logs.
        counter!("clients_created_total").increment(1);
        info!(client_id = %client_id, score = client.score(), "client_created");

        Ok(client_id)
    }
}
