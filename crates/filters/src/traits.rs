//! Core traits for the filter library.
//!
//! This module defines the ItemFilter trait that every predicate
//! implements, plus the description of which optional item sections a
//! filter needs populated before it can say anything useful.

use crate::context::EvaluationContext;
use item_data::{FieldCoverage, Item};

/// Optional item sections a filter reads.
///
/// The host only attaches assignments and review statistics on request,
/// so a filter has to announce what it consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredFields {
    pub assignments: bool,
    pub review_statistics: bool,
}

impl RequiredFields {
    pub const NONE: Self = Self {
        assignments: false,
        review_statistics: false,
    };

    pub const ASSIGNMENTS: Self = Self {
        assignments: true,
        review_statistics: false,
    };

    pub const REVIEW_STATISTICS: Self = Self {
        assignments: false,
        review_statistics: true,
    };

    pub const ALL: Self = Self {
        assignments: true,
        review_statistics: true,
    };

    pub fn union(self, other: Self) -> Self {
        Self {
            assignments: self.assignments || other.assignments,
            review_statistics: self.review_statistics || other.review_statistics,
        }
    }

    /// Required sections that no item in the collection carries
    pub fn missing_from(&self, coverage: &FieldCoverage) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if coverage.total == 0 {
            return missing;
        }
        if self.assignments && coverage.with_assignments == 0 {
            missing.push("assignments");
        }
        if self.review_statistics && coverage.with_review_statistics == 0 {
            missing.push("review_statistics");
        }
        missing
    }
}

/// Core trait for item predicates.
///
/// ## Design Note
/// - A filter owns its already-mapped threshold; building one is where
///   configuration errors surface, evaluating one never fails
/// - Anything the predicate can't evaluate (missing assignment, missing
///   timestamps, no characters) is excluded
/// - `Send + Sync` lets a built pipeline be shared across threads
pub trait ItemFilter: Send + Sync {
    /// Registry name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Optional item sections this filter reads
    fn required_fields(&self) -> RequiredFields;

    /// Decide whether a single item is included.
    ///
    /// # Arguments
    /// * `item` - The item under evaluation (borrowed, never mutated)
    /// * `context` - The pass's evaluation context
    fn matches(&self, item: &Item, context: &EvaluationContext) -> bool;

    /// Keep the items this filter includes, preserving order.
    fn apply(&self, items: Vec<Item>, context: &EvaluationContext) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| self.matches(item, context))
            .collect()
    }
}
