//! Message routes: list, create, update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::Validate;

use crate::application::dto::request::{CreateMessageRequest, UpdateMessageRequest};
use crate::application::dto::response::{MessageResponse, PopulatedMessageResponse};
use crate::presentation::http::reply::Reply;
use crate::shared::error::AppError;
use crate::startup::AppState;
use crate::telemetry::RequestTrace;

/// Query parameters accepted by the message list route.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    /// Optional sender filter.
    pub user: Option<String>,
}

/// Get all messages, sender populated when resolvable.
pub async fn get_messages(
    State(state): State<AppState>,
    trace: RequestTrace,
    Query(query): Query<MessageQuery>,
) -> Response {
    let reply = Reply::new(trace);

    let filter = match query.user.as_deref().filter(|u| !u.is_empty()) {
        Some(raw) => match ObjectId::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                return reply.failed(AppError::Validation(
                    "user must be a valid object id".into(),
                ))
            }
        },
        None => None,
    };

    match state.messages.get_messages(filter).await {
        Ok(messages) => reply.success(
            messages
                .into_iter()
                .map(PopulatedMessageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => reply.failed(error),
    }
}

/// Create a message; replies with the constructed record.
pub async fn create_message(
    State(state): State<AppState>,
    trace: RequestTrace,
    Json(body): Json<CreateMessageRequest>,
) -> Response {
    let reply = Reply::new(trace)
        .with_status(StatusCode::CREATED)
        .with_body(&body);

    if let Err(errors) = body.validate() {
        return reply.failed(AppError::Validation(errors.to_string()));
    }

    let sender = match body.user.as_deref().filter(|u| !u.is_empty()) {
        Some(raw) => match ObjectId::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                return reply.failed(AppError::Validation(
                    "user must be a valid object id".into(),
                ))
            }
        },
        None => None,
    };

    match state.messages.add_message(sender, &body.msg).await {
        Ok(message) => reply.success(MessageResponse::from(message)),
        Err(error) => reply.failed(error),
    }
}

/// Overwrite the body of an existing message.
pub async fn update_message(
    State(state): State<AppState>,
    trace: RequestTrace,
    Path(id): Path<String>,
    Json(body): Json<UpdateMessageRequest>,
) -> Response {
    let reply = Reply::new(trace).with_body(&body);

    if let Err(errors) = body.validate() {
        return reply.failed(AppError::Validation(errors.to_string()));
    }

    let id = match ObjectId::parse_str(&id) {
        Ok(id) => id,
        Err(_) => {
            return reply.failed(AppError::Validation(
                "id must be a valid object id".into(),
            ))
        }
    };

    match state.messages.update_message(id, &body.message).await {
        Ok(message) => reply.success(MessageResponse::from(message)),
        Err(error) => reply.failed(error),
    }
}
