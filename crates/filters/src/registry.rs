//! Filter descriptors and the registry that holds them.
//!
//! The registry is built once at startup from an explicit list of
//! descriptors and handed to whoever runs filtering passes. Settings
//! decide which built-in filters are registered at all.

use crate::error::{FilterError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    failed_last_review, leech_training, recent_lessons, related_items, time_until_review,
};
use crate::settings::FilterSettings;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use std::fmt;

/// Builds a filter from its raw threshold (the value map step)
pub type FilterConstructor = fn(&FilterValue) -> Result<Box<dyn ItemFilter>>;

/// Everything a host needs to present and instantiate one filter.
#[derive(Clone)]
pub struct FilterDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterValueKind,
    pub default_value: FilterValue,
    pub placeholder: Option<&'static str>,
    pub hover_tip: &'static str,
    pub required_fields: RequiredFields,
    pub constructor: FilterConstructor,
}

impl FilterDescriptor {
    /// Build the filter, falling back to the default threshold
    pub fn build(&self, value: Option<&FilterValue>) -> Result<Box<dyn ItemFilter>> {
        (self.constructor)(value.unwrap_or(&self.default_value))
    }
}

impl fmt::Debug for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("default_value", &self.default_value)
            .field("placeholder", &self.placeholder)
            .field("required_fields", &self.required_fields)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of filter descriptors, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    descriptors: Vec<FilterDescriptor>,
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in filters
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(recent_lessons::descriptor());
        registry.register(leech_training::descriptor());
        registry.register(time_until_review::descriptor());
        registry.register(failed_last_review::descriptor());
        registry.register(related_items::descriptor());
        registry
    }

    /// Built-in filters that are enabled in `settings`
    pub fn from_settings(settings: &FilterSettings) -> Self {
        let mut registry = Self::builtin();
        registry.descriptors.retain(|descriptor| {
            let enabled = settings.is_enabled(descriptor.name);
            if !enabled {
                tracing::debug!("Filter disabled in settings: {}", descriptor.name);
            }
            enabled
        });
        registry
    }

    /// Register a descriptor, replacing any existing one with the same name
    pub fn register(&mut self, descriptor: FilterDescriptor) {
        match self
            .descriptors
            .iter_mut()
            .find(|existing| existing.name == descriptor.name)
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// Unregister a filter by name
    pub fn remove(&mut self, name: &str) -> Option<FilterDescriptor> {
        let idx = self.descriptors.iter().position(|d| d.name == name)?;
        Some(self.descriptors.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&FilterDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Build a registered filter with an optional raw threshold
    pub fn build(&self, name: &str, value: Option<&FilterValue>) -> Result<Box<dyn ItemFilter>> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;
        descriptor.build(value)
    }

    /// Build a filter from a `NAME` or `NAME=VALUE` spec.
    ///
    /// The value is interpreted according to the filter's kind.
    pub fn build_from_spec(&self, spec: &str) -> Result<Box<dyn ItemFilter>> {
        let (name, raw) = match spec.split_once('=') {
            Some((name, raw)) => (name.trim(), Some(raw)),
            None => (spec.trim(), None),
        };
        if name.is_empty() {
            return Err(FilterError::InvalidSpec(spec.to_string()));
        }

        let descriptor = self
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;
        let value = raw.map(|raw| FilterValue::from_raw(raw, descriptor.kind));
        descriptor.build(value.as_ref())
    }

    /// Build a pipeline from filter specs, in the order given
    pub fn build_pipeline<'a, I>(&self, specs: I) -> Result<FilterPipeline>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pipeline = FilterPipeline::new();
        for spec in specs {
            pipeline = pipeline.add_boxed(self.build_from_spec(spec)?);
        }
        Ok(pipeline)
    }
}
