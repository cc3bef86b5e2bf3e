//! The user store over the `User` collection.

use async_trait::async_trait;
use mongodb::{Collection, Database};

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

/// MongoDB user repository over the `User` collection.
pub struct MongoUserRepository {
    users: Collection<User>,
}

impl MongoUserRepository {
    /// Creates a new repository over the given database handle.
    pub fn new(database: &Database) -> Self {
        Self {
            users: database.collection("User"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn add(&self, name: &str) -> Result<User, AppError> {
        let mut user = User {
            id: None,
            name: name.to_string(),
        };

        let result = self.users.insert_one(&user, None).await?;
        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }
}
