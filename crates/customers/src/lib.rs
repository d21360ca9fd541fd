//! Customers domain module.
//!
//! A customer is one arrival at the checkout: when they queued, where they
//! live, and what they bought.

pub mod customer;

pub use customer::{Customer, ZipCode};
