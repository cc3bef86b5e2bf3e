//! Settings structures and the file/environment loading chain.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Everything the process needs to come up.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,

    pub database: DatabaseSettings,

    pub cors: CorsSettings,

    /// Running environment (development, staging, production).
    pub environment: String,
}

/// Listener binding and static file serving.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address to bind, e.g. "0.0.0.0".
    pub host: String,

    pub port: u16,

    /// Directory served under `/static`.
    pub static_dir: String,
}

/// MongoDB connection target.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection URL, e.g. "mongodb://localhost:27017".
    pub url: String,

    /// Database holding the `Messages` and `User` collections.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; an empty list means any origin.
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings, later sources winning over earlier ones: built-in
    /// defaults, then `config/default.toml`, then `config/{RUN_ENV}.toml`,
    /// then environment variables (`APP__SERVER__PORT` style or the plain
    /// names mapped below). A `.env` file is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "chat")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain-named variables, for parity with how the service is
            // usually deployed
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?
            .build()?
            .try_deserialize()
    }

    /// "host:port" string for the listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
