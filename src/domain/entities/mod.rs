//! The two persisted document shapes: a `User` in the `User` collection,
//! and a `Message` in `Messages` with an optional reference to its sender.

pub mod message;
pub mod user;

pub use message::{Message, MessageRepository, PopulatedMessage, Sender};
pub use user::{User, UserRepository};
