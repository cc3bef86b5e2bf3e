//! Response shapes. ObjectIds render as their hex string form here; the
//! extended-JSON representation never leaves the storage layer.

use serde::Serialize;

use crate::domain::{Message, PopulatedMessage, Sender, User};

/// User as embedded in API responses.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
        }
    }
}

/// Message record as echoed by the create and update routes.
///
/// A freshly created record has no identifier yet, so the field is
/// omitted; updates return the stored record with its id.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub message: String,
    pub date: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.map(|id| id.to_hex()),
            user: message.user.map(|id| id.to_hex()),
            message: message.message,
            date: message.date.to_rfc3339(),
        }
    }
}

/// Sender field of a populated list entry: the full user record when the
/// reference resolves, the raw id when it does not.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SenderResponse {
    User(UserResponse),
    Reference(String),
}

/// Message as returned by the list route.
#[derive(Debug, Serialize)]
pub struct PopulatedMessageResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<SenderResponse>,
    pub message: String,
    pub date: String,
}

impl From<PopulatedMessage> for PopulatedMessageResponse {
    fn from(message: PopulatedMessage) -> Self {
        Self {
            id: message.id.to_hex(),
            user: message.user.map(|sender| match sender {
                Sender::User(user) => SenderResponse::User(user.into()),
                Sender::Reference(id) => SenderResponse::Reference(id.to_hex()),
            }),
            message: message.message,
            date: message.date.to_rfc3339(),
        }
    }
}
