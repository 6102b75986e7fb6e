use crate::domain::entities::health_problem::HealthProblem;

/// Sum of degrees at which the score crosses 50.
pub const SCORE_MIDPOINT: f64 = 2.8;

/// Logistic risk score in `(0, 100)` over the summed health-problem degrees.
///
/// An absent list scores exactly `0.0`; an empty one is a sum of zero and scores about 5.73.
pub fn risk_score(health_problems: Option<&[HealthProblem]>) -> f64 {
    let Some(health_problems) = health_problems else {
        return 0.0;
    };

    let sum_of_degrees: i64 = health_problems.iter().map(|p| i64::from(p.degree)).sum();
    let exp = (-(-SCORE_MIDPOINT + sum_of_degrees as f64)).exp();

    (1.0 / (1.0 + exp)) * 100.0
}
