//! `checkout-analytics`
//!
//! **Responsibility:** descriptive statistics over one loaded checkout snapshot.
//!
//! - It never mutates the snapshot; every query borrows it read-only.
//! - It returns plain data (maps, sets, view structs), never formatted text.
//! - Degenerate input resolves to zero/empty values; only the reporting
//!   operations refuse to run on an incomplete snapshot.

pub mod engine;
pub mod error;
pub mod snapshot;
pub mod statistics;

pub use engine::{AggregationEngine, IntervalRevenue};
pub use error::{AnalyticsError, AnalyticsResult};
pub use snapshot::Snapshot;
pub use statistics::{CustomerStatistics, ProductStatistics, RevenueStatistics};
