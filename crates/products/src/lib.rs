//! Products domain module.
//!
//! The catalog side of a checkout snapshot: immutable products identified by
//! their product code.

pub mod product;

pub use product::{Product, ProductCode};
