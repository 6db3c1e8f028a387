//! Error types for the item-data crate.
//!
//! Loading an item export can fail in a handful of ways: the file is
//! missing, the JSON is malformed, or the export is internally
//! inconsistent (two items sharing an id, an SRS stage out of range).

use thiserror::Error;

/// Errors that can occur while loading and validating an item export
#[derive(Error, Debug)]
pub enum ItemDataError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The export is not valid JSON, or doesn't have the item shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The top-level JSON value is neither an array nor an object with `data`
    #[error("Unsupported export layout: {0}")]
    UnsupportedLayout(String),

    /// A data field had an invalid value
    #[error("Invalid value for {field} on item {item_id}: {value}")]
    InvalidValue {
        item_id: u32,
        field: String,
        value: String,
    },

    /// Two items in the same export share an id
    #[error("Duplicate item id: {0}")]
    DuplicateId(u32),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ItemDataError>;
