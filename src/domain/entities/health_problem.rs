use crate::domain::entities::client::ClientError;
use serde::{Deserialize, Serialize};

pub const MIN_DEGREE: i32 = 1;
pub const MAX_DEGREE: i32 = 10;

/// A single health problem reported for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProblem {
    #[serde(default)]
    pub name: String,
    /// Severity, 1 (mild) to 10 (severe).
    pub degree: i32,
}

impl HealthProblem {
    pub fn new(name: impl Into<String>, degree: i32) -> Self {
        Self {
            name: name.into(),
            degree,
        }
    }

    pub fn has_valid_degree(&self) -> bool {
        (MIN_DEGREE..=MAX_DEGREE).contains(&self.degree)
    }
}

/// Reject the first problem whose degree falls outside `[1, 10]`. An absent list is accepted.
pub fn check_health_problems(health_problems: Option<&[HealthProblem]>) -> Result<(), ClientError> {
    let Some(health_problems) = health_problems else {
        return Ok(());
    };

    match health_problems.iter().find(|p| !p.has_valid_degree()) {
        Some(invalid) => Err(ClientError::InvalidHealthProblemDegree {
            degree: invalid.degree,
        }),
        None => Ok(()),
    }
}
