pub mod risk_score;
