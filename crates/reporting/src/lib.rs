//! Text rendering of checkout statistics.
//!
//! The formatter only asks the engine questions and lays the answers out; all
//! display knobs (interval length, highlight symbols, currency label) come in
//! through [`ReportConfig`].

pub mod config;
pub mod formatter;

pub use config::ReportConfig;
pub use formatter::{INCOMPLETE_DATA_MESSAGE, ReportFormatter};
