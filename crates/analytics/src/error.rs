use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid calendar month: {0}")]
    InvalidMonth(String),
}
