use crate::domain::entities::client::{Client, NewClient};
use crate::domain::entities::health_problem::HealthProblem;
use crate::domain::value_objects::birth_date::BirthDate;
use crate::domain::value_objects::ids::ClientId;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProblemRow {
    pub name: String,
    pub degree: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRow {
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub birth_date: String,
    pub gender: String,
    pub health_problems: Option<Vec<HealthProblemRow>>,
    /// Informational copy for readers of the store. `into_client` recomputes it.
    pub score: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ClientRow {
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id().map(|id| id.0),
            name: client.name().to_string(),
            birth_date: client.birth_date().as_text(),
            gender: client.gender().to_string(),
            health_problems: client.health_problems().map(|problems| {
                problems
                    .iter()
                    .map(|p| HealthProblemRow {
                        name: p.name.clone(),
                        degree: p.degree,
                    })
                    .collect()
            }),
            score: client.score(),
            created_at: client.created_at().as_inner(),
            updated_at: client.updated_at().as_inner(),
        }
    }

    /// Rebuild the entity through its validating constructor. The stored score is not trusted.
    pub fn into_client(self) -> Result<Client, ClientRepositoryError> {
        let health_problems = self.health_problems.map(|problems| {
            problems
                .into_iter()
                .map(|p| HealthProblem::new(p.name, p.degree))
                .collect()
        });

        let mut input = NewClient::new(
            self.name,
            BirthDate::parse(&self.birth_date),
            self.gender,
            health_problems,
        )
        .with_created_at(Timestamp::from(self.created_at))
        .with_updated_at(Timestamp::from(self.updated_at));
        input.id = self.id.map(ClientId);

        Client::new(input).map_err(|_| ClientRepositoryError::InvalidInput)
    }
}
