//! Snapshot loading.
//!
//! Turns a JSON snapshot document into a validated [`Snapshot`]. This is the
//! only place where quantities, prices and references are checked; the domain
//! types downstream trust what they are given.

pub mod document;
pub mod error;

pub use document::{load_from_path, load_from_str};
pub use error::{LoadError, LoadResult};
