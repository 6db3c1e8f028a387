//! # Item Data Crate
//!
//! This crate holds the WaniKani item model that the filter library reads.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Item, Assignment, ReviewStatistics)
//! - **parser**: Parse JSON item exports into Rust structs
//! - **collection**: Ordered item set with id lookups
//! - **error**: Error types for loading exports
//!
//! ## Example Usage
//!
//! ```ignore
//! use item_data::ItemCollection;
//! use std::path::Path;
//!
//! let items = ItemCollection::load_from_file(Path::new("items.json"))?;
//! let coverage = items.coverage();
//!
//! println!("{} of {} items have assignments", coverage.with_assignments, coverage.total);
//! ```

// Public modules
pub mod collection;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use collection::{FieldCoverage, ItemCollection};
pub use error::{ItemDataError, Result};
pub use types::{
    Assignment, Axis, BURNED_STAGE, Item, ItemId, LESSON_STAGE, ReviewStatistics, SubjectData,
};
