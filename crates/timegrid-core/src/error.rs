//! Error types for timegrid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
