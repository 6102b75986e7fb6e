use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    /// `tracing_subscriber::EnvFilter` directives, e.g. `info` or `client_score=debug`.
    pub filter: String,
}

/// Load settings from `config/default.toml`, `config/<env>.toml`, and env overrides.
pub fn load() -> Result<Settings, config::ConfigError> {
    let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{env_name}")).required(false))
        .add_source(config::Environment::with_prefix("CLIENT_SCORE").separator("__"))
        .build()?
        .try_deserialize()
}
