//! MongoDB client creation.

use mongodb::{options::ClientOptions, Client, Database};

use crate::config::DatabaseSettings;

/// Connect to MongoDB and return a handle to the configured database.
///
/// The handle is created once at startup and injected into the
/// repositories; there is no reconnect policy beyond the driver's own.
pub async fn connect(settings: &DatabaseSettings) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&settings.url).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    Ok(client.database(&settings.name))
}
