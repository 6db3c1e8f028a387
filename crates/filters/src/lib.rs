//! Item filters for WaniKani study tools.
//!
//! This crate provides:
//! - ItemFilter trait and the five built-in predicates
//! - SRS interval tables used by the time-based filters
//! - FilterRegistry of descriptors (label, default, help text, value map)
//! - FilterPipeline for running a filtering pass
//!
//! ## Architecture
//! A filtering pass works in stages:
//! 1. The registry maps each configured raw threshold into a typed filter
//! 2. The pipeline prepares one EvaluationContext ("now") for the pass
//! 3. Every item is evaluated by every filter against that same context
//!
//! ## Example Usage
//! ```ignore
//! use filters::{FilterRegistry, FilterSettings};
//!
//! let registry = FilterRegistry::from_settings(&FilterSettings::default());
//! let pipeline = registry.build_pipeline(["recent_lessons=48", "leech_training=1.5"])?;
//!
//! let filtered = pipeline.run(items);
//! ```

pub mod context;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod registry;
pub mod settings;
pub mod srs;
pub mod traits;
pub mod value;

// Re-export main types
pub use context::EvaluationContext;
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use registry::{FilterConstructor, FilterDescriptor, FilterRegistry};
pub use settings::FilterSettings;
pub use traits::{ItemFilter, RequiredFields};
pub use value::{FilterValue, FilterValueKind};
