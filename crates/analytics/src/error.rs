use thiserror::Error;

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The snapshot has no products or no customers; reporting is skipped.
    #[error("no products or customers have been set up")]
    IncompleteData,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
