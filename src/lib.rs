//! # Chat API Library
//!
//! A minimal chat message API: create/list/update messages and create
//! users over HTTP, persisted in MongoDB, with one response envelope
//! shared by every route.
//!
//! The layering separates the document mapping (infrastructure) from the
//! business rules (application) and the HTTP surface (presentation):
//!
//! ```text
//! chat_api/
//! +-- config/         Settings loading (files + environment)
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and request/response DTOs
//! +-- infrastructure/ MongoDB handle and repository impls
//! +-- presentation/   Routes, handlers, envelope, middleware
//! +-- shared/         Error taxonomy
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod startup;
pub mod telemetry;
