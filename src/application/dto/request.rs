//! Request bodies. Missing fields deserialize to their empty value and
//! fail the presence check instead of persisting silently-wrong records.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/v1/messages/`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateMessageRequest {
    /// Sender reference; optional and not checked for existence.
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "msg is required"))]
    pub msg: String,
}

/// Body of `PATCH /api/v1/messages/{id}`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// Body of `POST /api/v1/user/`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}
