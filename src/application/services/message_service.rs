//! Message create/list/update, between the routes and the store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::domain::{Message, MessageRepository, PopulatedMessage};
use crate::shared::error::AppError;

#[async_trait]
pub trait MessageService: Send + Sync {
    /// Build a new message record and hand it to the store.
    ///
    /// Resolves with the constructed record as soon as the write has been
    /// handed off; it does not wait for the write to settle.
    async fn add_message(&self, sender: Option<ObjectId>, msg: &str)
        -> Result<Message, AppError>;

    /// All messages, populated, optionally restricted to one sender.
    async fn get_messages(
        &self,
        filter_user: Option<ObjectId>,
    ) -> Result<Vec<PopulatedMessage>, AppError>;

    /// Overwrite the body of an existing message.
    async fn update_message(&self, id: ObjectId, message: &str) -> Result<Message, AppError>;
}

pub struct MessageServiceImpl<R: MessageRepository> {
    repo: Arc<R>,
}

impl<R: MessageRepository> MessageServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: MessageRepository + 'static> MessageService for MessageServiceImpl<R> {
    async fn add_message(
        &self,
        sender: Option<ObjectId>,
        msg: &str,
    ) -> Result<Message, AppError> {
        if msg.trim().is_empty() {
            return Err(AppError::Validation("message is required".into()));
        }

        let record = Message {
            id: None,
            user: sender,
            message: msg.to_string(),
            date: Utc::now(),
        };

        // The write is handed off, not awaited: the caller sees the record
        // before durability is confirmed. A failed write only reaches the
        // log.
        let repo = Arc::clone(&self.repo);
        let pending = record.clone();
        tokio::spawn(async move {
            if let Err(error) = repo.save(&pending).await {
                tracing::error!(%error, "background message write failed");
            }
        });

        Ok(record)
    }

    async fn get_messages(
        &self,
        filter_user: Option<ObjectId>,
    ) -> Result<Vec<PopulatedMessage>, AppError> {
        self.repo.find_all(filter_user).await
    }

    async fn update_message(&self, id: ObjectId, message: &str) -> Result<Message, AppError> {
        if message.trim().is_empty() {
            return Err(AppError::Validation("message is required".into()));
        }

        self.repo.update_message(id, message).await
    }
}
