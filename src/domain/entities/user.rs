//! The `User` document and its store contract.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user document.
///
/// - `_id`: ObjectId, generated by the database on insert
/// - `name`: text label shown as the sender of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Database-generated identifier; `None` until the document is persisted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Display name for the user.
    pub name: String,
}

/// Persistence contract for users. Implemented over MongoDB in the
/// infrastructure layer and by in-memory fakes in tests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with the generated identifier.
    async fn add(&self, name: &str) -> Result<User, AppError>;
}
