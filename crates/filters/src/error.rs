//! Error types for building filters.
//!
//! Predicates themselves never fail: an item that can't be evaluated is
//! simply excluded. Errors only arise while turning configuration into
//! filters, i.e. unknown names, thresholds of the wrong kind, or an
//! unreadable settings file.

use crate::value::FilterValueKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// No filter with this name is registered
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The configured threshold can't be mapped for this filter
    #[error("Invalid value for filter {filter}: expected {expected}, got {value}")]
    InvalidValue {
        filter: String,
        expected: FilterValueKind,
        value: String,
    },

    /// A `NAME[=VALUE]` filter spec couldn't be split
    #[error("Invalid filter spec: {0}")]
    InvalidSpec(String),

    /// Settings file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Settings file is not valid JSON
    #[error("Settings error: {0}")]
    SettingsError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
