//! Service traits and implementations.

pub mod message_service;
pub mod user_service;

pub use message_service::{MessageService, MessageServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
