//! Error types for spread layout

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown photobook format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
