//! User creation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user and return it with the generated identifier.
    async fn add_user(&self, name: &str) -> Result<User, AppError>;
}

pub struct UserServiceImpl<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn add_user(&self, name: &str) -> Result<User, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }

        self.repo.add(name).await
    }
}
