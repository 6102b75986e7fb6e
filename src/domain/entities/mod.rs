pub mod client;
pub mod health_problem;
