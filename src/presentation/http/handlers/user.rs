//! User route: create.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use validator::Validate;

use crate::application::dto::request::CreateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::presentation::http::reply::Reply;
use crate::shared::error::AppError;
use crate::startup::AppState;
use crate::telemetry::RequestTrace;

/// Create a user; replies with the persisted entity.
pub async fn create_user(
    State(state): State<AppState>,
    trace: RequestTrace,
    Json(body): Json<CreateUserRequest>,
) -> Response {
    let reply = Reply::new(trace).with_body(&body);

    if let Err(errors) = body.validate() {
        return reply.failed(AppError::Validation(errors.to_string()));
    }

    match state.users.add_user(&body.name).await {
        Ok(user) => reply.success(UserResponse::from(user)),
        Err(error) => reply.failed(error),
    }
}
