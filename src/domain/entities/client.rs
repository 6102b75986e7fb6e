use crate::domain::entities::health_problem::{HealthProblem, check_health_problems};
use crate::domain::services::risk_score::risk_score;
use crate::domain::value_objects::birth_date::BirthDate;
use crate::domain::value_objects::ids::ClientId;
use crate::domain::value_objects::timestamps::Timestamp;
use thiserror::Error;

pub const VALID_GENDERS: [&str; 2] = ["M", "F"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("invalid health problem degree {degree}: must be between 1 and 10")]
    InvalidHealthProblemDegree { degree: i32 },

    #[error("invalid gender {gender:?}: must be one of M, F")]
    InvalidGender { gender: String },
}

/// Accept only the genders in [`VALID_GENDERS`], case-sensitive.
pub fn validate_gender(gender: &str) -> Result<(), ClientError> {
    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(ClientError::InvalidGender {
            gender: gender.to_string(),
        })
    }
}

/// Input for [`Client::new`].
#[derive(Debug, Clone)]
pub struct NewClient {
    pub id: Option<ClientId>,
    pub name: String,
    pub birth_date: BirthDate,
    pub gender: String,
    pub health_problems: Option<Vec<HealthProblem>>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        birth_date: BirthDate,
        gender: impl Into<String>,
        health_problems: Option<Vec<HealthProblem>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            gender: gender.into(),
            health_problems,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
        self.updated_at = Some(updated_at);
        self
    }
}

/// Field-wise partial record merged by `Client::apply_patch`. `None` leaves a field as is.
///
/// Only built from an already validated `Client`, so degrees and gender are never unchecked.
#[derive(Debug, Clone, Default, PartialEq)]
struct ClientPatch {
    id: Option<ClientId>,
    name: Option<String>,
    birth_date: Option<BirthDate>,
    gender: Option<String>,
    health_problems: Option<Vec<HealthProblem>>,
    score: Option<f64>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl From<&Client> for ClientPatch {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: Some(client.name.clone()),
            birth_date: Some(client.birth_date.clone()),
            gender: Some(client.gender.clone()),
            health_problems: client.health_problems.clone(),
            score: Some(client.score),
            created_at: Some(client.created_at),
            updated_at: Some(client.updated_at),
        }
    }
}

/// A person with health problems and a risk score derived from them.
///
/// The score is recomputed on construction and on every successful
/// [`Client::set_health_problems`]; it has no setter of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    id: Option<ClientId>,
    name: String,
    birth_date: BirthDate,
    gender: String,
    health_problems: Option<Vec<HealthProblem>>,
    score: f64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Client {
    /// Build a client, rejecting any health problem with a degree outside `[1, 10]`.
    ///
    /// Gender is stored as given; only [`Client::set_gender`] checks it.
    pub fn new(input: NewClient) -> Result<Self, ClientError> {
        // Step 1: Validate before any field is accepted.
        check_health_problems(input.health_problems.as_deref())?;

        // Step 2: Resolve default timestamps from a single instant.
        let now = Timestamp::now_utc();

        let mut client = Self {
            id: input.id,
            name: input.name,
            birth_date: input.birth_date,
            gender: input.gender,
            health_problems: input.health_problems,
            score: 0.0,
            created_at: input.created_at.unwrap_or(now),
            updated_at: input.updated_at.unwrap_or(now),
        };

        // Step 3: Derive the score.
        client.update_score();
        Ok(client)
    }

    fn update_score(&mut self) {
        self.score = risk_score(self.health_problems.as_deref());
    }

    /// Overwrite every field the patch carries, score included, without validation.
    fn apply_patch(&mut self, patch: &ClientPatch) {
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(birth_date) = &patch.birth_date {
            self.birth_date = birth_date.clone();
        }
        if let Some(gender) = &patch.gender {
            self.gender = gender.clone();
        }
        if let Some(health_problems) = &patch.health_problems {
            self.health_problems = Some(health_problems.clone());
        }
        if let Some(score) = patch.score {
            self.score = score;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }

    /// Copy every defined field of `source` onto this client, score included.
    ///
    /// The score is taken as is, so it follows `source` even when `source` has no health
    /// problems and this client keeps its own list.
    pub fn update_properties_from(&mut self, source: &Client) {
        self.apply_patch(&ClientPatch::from(source));
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn id(&self) -> Option<ClientId> {
        self.id
    }

    pub fn set_id(&mut self, id: ClientId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: BirthDate) {
        self.birth_date = birth_date;
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) -> Result<(), ClientError> {
        let gender = gender.into();
        validate_gender(&gender)?;
        self.gender = gender;
        Ok(())
    }

    pub fn health_problems(&self) -> Option<&[HealthProblem]> {
        self.health_problems.as_deref()
    }

    /// Replace the health problems and rescore. On error nothing changes.
    pub fn set_health_problems(
        &mut self,
        health_problems: Option<Vec<HealthProblem>>,
    ) -> Result<(), ClientError> {
        check_health_problems(health_problems.as_deref())?;
        self.health_problems = health_problems;
        self.update_score();
        Ok(())
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) {
        self.created_at = created_at;
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, updated_at: Timestamp) {
        self.updated_at = updated_at;
    }
}
