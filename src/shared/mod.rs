//! Cross-layer pieces.

pub mod error;
