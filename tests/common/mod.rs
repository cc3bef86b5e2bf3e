//! In-memory repository implementations and a router harness, so the API
//! tests exercise the full request pipeline without a running MongoDB.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use chat_api::application::services::{MessageServiceImpl, UserServiceImpl};
use chat_api::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use chat_api::domain::{
    Message, MessageRepository, PopulatedMessage, Sender, User, UserRepository,
};
use chat_api::presentation::http::routes;
use chat_api::shared::error::AppError;
use chat_api::startup::AppState;

/// Shared in-memory collections standing in for the two Mongo collections.
#[derive(Default)]
pub struct InMemoryDb {
    pub messages: Mutex<Vec<Message>>,
    pub users: Mutex<Vec<User>>,
}

pub struct InMemoryMessageRepository {
    db: Arc<InMemoryDb>,
    fail_reads: bool,
    fail_writes: bool,
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Query("simulated write failure".into()));
        }
        let mut stored = message.clone();
        stored.id = Some(ObjectId::new());
        self.db.messages.lock().unwrap().push(stored);
        Ok(())
    }

    async fn find_all(
        &self,
        filter_user: Option<ObjectId>,
    ) -> Result<Vec<PopulatedMessage>, AppError> {
        if self.fail_reads {
            return Err(AppError::Query("simulated read failure".into()));
        }
        let users = self.db.users.lock().unwrap().clone();
        let messages = self.db.messages.lock().unwrap().clone();

        Ok(messages
            .into_iter()
            .filter(|m| filter_user.map_or(true, |f| m.user == Some(f)))
            .filter_map(|m| {
                let id = m.id?;
                let user = m.user.map(|reference| {
                    users
                        .iter()
                        .find(|u| u.id == Some(reference))
                        .cloned()
                        .map(Sender::User)
                        .unwrap_or(Sender::Reference(reference))
                });
                Some(PopulatedMessage {
                    id,
                    user,
                    message: m.message,
                    date: m.date,
                })
            })
            .collect())
    }

    async fn update_message(&self, id: ObjectId, message: &str) -> Result<Message, AppError> {
        let mut messages = self.db.messages.lock().unwrap();
        let entry = messages
            .iter_mut()
            .find(|m| m.id == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("message {} not found", id.to_hex())))?;
        entry.message = message.to_string();
        Ok(entry.clone())
    }
}

pub struct InMemoryUserRepository {
    db: Arc<InMemoryDb>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, name: &str) -> Result<User, AppError> {
        let user = User {
            id: Some(ObjectId::new()),
            name: name.to_string(),
        };
        self.db.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: "public".into(),
        },
        database: DatabaseSettings {
            url: "mongodb://localhost:27017".into(),
            name: "chat_test".into(),
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Test application: the real router over in-memory repositories.
pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDb>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_failures(false, false)
    }

    /// Build an app whose message store fails reads and/or writes.
    pub fn with_failures(fail_reads: bool, fail_writes: bool) -> Self {
        let db = Arc::new(InMemoryDb::default());
        let message_repo = Arc::new(InMemoryMessageRepository {
            db: Arc::clone(&db),
            fail_reads,
            fail_writes,
        });
        let user_repo = Arc::new(InMemoryUserRepository {
            db: Arc::clone(&db),
        });

        let state = AppState::new(
            Arc::new(MessageServiceImpl::new(message_repo)),
            Arc::new(UserServiceImpl::new(user_repo)),
            test_settings(),
        );

        Self {
            router: routes::create_router(state),
            db,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Wait until the background message writer has persisted `count`
    /// records. The create route replies before the write settles, so
    /// tests that read afterwards need this.
    pub async fn wait_for_messages(&self, count: usize) {
        for _ in 0..100 {
            if self.db.messages.lock().unwrap().len() >= count {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {} background write(s)", count);
    }
}

/// Read a response body as JSON.
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
