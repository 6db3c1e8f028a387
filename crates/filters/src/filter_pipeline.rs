//! The FilterPipeline runs a filtering pass.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. A pass shares a
//! single EvaluationContext across every filter and every item.

use crate::context::EvaluationContext;
use crate::traits::{ItemFilter, RequiredFields};
use item_data::Item;

/// Chains multiple filters together; an item must pass all of them.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RecentLessonsFilter::new(24.0))
///     .add_filter(LeechTrainingFilter::new(1.0));
///
/// let filtered = pipeline.run(items);
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn ItemFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(self, filter: impl ItemFilter + 'static) -> Self {
        self.add_boxed(Box::new(filter))
    }

    /// Add an already boxed filter, as handed out by the registry.
    pub fn add_boxed(mut self, filter: Box<dyn ItemFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Union of the item sections every filter reads
    pub fn required_fields(&self) -> RequiredFields {
        self.filters
            .iter()
            .fold(RequiredFields::NONE, |acc, f| acc.union(f.required_fields()))
    }

    /// Whether a single item passes every filter
    pub fn matches(&self, item: &Item, context: &EvaluationContext) -> bool {
        self.filters.iter().all(|f| f.matches(item, context))
    }

    /// Apply all filters in sequence to the items.
    ///
    /// ## Algorithm
    /// 1. Start with the input items
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter with the shared context
    ///    c. Log output count
    /// 3. Return the items left over, in their original order
    pub fn apply(&self, items: Vec<Item>, context: &EvaluationContext) -> Vec<Item> {
        let mut current = items;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Prepare a fresh context from the wall clock and apply every filter
    pub fn run(&self, items: Vec<Item>) -> Vec<Item> {
        let context = EvaluationContext::prepare();
        tracing::debug!("Starting filter pass at {}", context.now());
        self.apply(items, &context)
    }
}
