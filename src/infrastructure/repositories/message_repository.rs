//! The message store over the `Messages` collection, including the
//! populate step that resolves sender references against `User`.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use crate::domain::{Message, MessageRepository, PopulatedMessage, Sender, User};
use crate::shared::error::AppError;

/// MongoDB message repository.
///
/// Exclusive owner of the mapping between API-level records and the
/// `Messages` collection. Holds a handle to the `User` collection as well
/// because list reads join sender references in application space.
pub struct MongoMessageRepository {
    messages: Collection<Message>,
    users: Collection<User>,
}

impl MongoMessageRepository {
    /// Creates a new repository over the given database handle.
    pub fn new(database: &Database) -> Self {
        Self {
            messages: database.collection("Messages"),
            users: database.collection("User"),
        }
    }

    /// Fetch every referenced user in one query and index them by id.
    async fn load_senders(
        &self,
        messages: &[Message],
    ) -> Result<HashMap<ObjectId, User>, AppError> {
        let ids: Vec<ObjectId> = messages.iter().filter_map(|m| m.user).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users: Vec<User> = self
            .users
            .find(doc! { "_id": { "$in": ids } }, None)
            .await?
            .try_collect()
            .await?;

        Ok(users
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect())
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), AppError> {
        self.messages.insert_one(message, None).await?;
        Ok(())
    }

    async fn find_all(
        &self,
        filter_user: Option<ObjectId>,
    ) -> Result<Vec<PopulatedMessage>, AppError> {
        let filter = match filter_user {
            Some(user) => doc! { "user": user },
            None => doc! {},
        };

        let messages: Vec<Message> = self
            .messages
            .find(filter, None)
            .await?
            .try_collect()
            .await?;

        let senders = self.load_senders(&messages).await?;

        Ok(messages
            .into_iter()
            .filter_map(|m| {
                let id = m.id?;
                let user = m.user.map(|reference| match senders.get(&reference) {
                    Some(user) => Sender::User(user.clone()),
                    None => Sender::Reference(reference),
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
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.messages
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "message": message } },
                options,
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {} not found", id.to_hex())))
    }
}
