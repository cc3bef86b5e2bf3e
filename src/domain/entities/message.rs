//! The `Messages` document, its populated read shape, and its store
//! contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

use super::user::User;

/// Represents a message document.
///
/// - `_id`: ObjectId, generated by the database on insert
/// - `user`: optional reference to a `User` document; not checked against
///   the `User` collection at write time
/// - `message`: text body, required, non-empty
/// - `date`: stamped server-side when the record is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Database-generated identifier; `None` until the document is persisted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Sender reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ObjectId>,

    /// Text body.
    pub message: String,

    /// Creation timestamp, stored as a BSON datetime.
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

/// Sender field of a populated message.
#[derive(Debug, Clone, PartialEq)]
pub enum Sender {
    /// The reference resolved to a full user record.
    User(User),
    /// Dangling reference, kept as the raw identifier.
    Reference(ObjectId),
}

/// A message as returned by list reads: the `user` reference is replaced
/// by the full user record when it resolves, and left as the raw id when
/// it does not.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedMessage {
    pub id: ObjectId,
    pub user: Option<Sender>,
    pub message: String,
    pub date: DateTime<Utc>,
}

/// Persistence contract for messages.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a new message document.
    async fn save(&self, message: &Message) -> Result<(), AppError>;

    /// All messages, optionally restricted to one sender, with the `user`
    /// reference populated.
    async fn find_all(&self, filter_user: Option<ObjectId>)
        -> Result<Vec<PopulatedMessage>, AppError>;

    /// Overwrite the `message` field of an existing document and return the
    /// updated record. Fails with `NotFound` when the id does not exist.
    async fn update_message(&self, id: ObjectId, message: &str) -> Result<Message, AppError>;
}
