//! `checkout-core`: shared error and identity building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
