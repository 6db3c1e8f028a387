//! Filter on how much of the current SRS interval is still ahead.
//!
//! A value of 50 keeps items with at least half of their interval left
//! before the next review, i.e. items that won't come up again soon.

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::filters::number_value;
use crate::registry::FilterDescriptor;
use crate::srs;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use item_data::{BURNED_STAGE, Item, LESSON_STAGE};

pub const NAME: &str = "time_until_review";
const LABEL: &str = "Time Until Review";
const PLACEHOLDER: &str = "Percent";
const HOVER_TIP: &str = "Only include items that have at least X% of their SRS interval \
remaining before the next review.\n * Burned items are always included.\n \
* Items still in the lesson queue are never included.";
const DEFAULT_PERCENT: f64 = 50.0;

/// Keeps items with at least `fraction` of their interval left.
///
/// ## Algorithm
/// 1. Stage 0 is excluded, stage 9 is included
/// 2. minimum = interval_hours(stage, level) * fraction
/// 3. remaining = hours from now until `available_at`
/// 4. Keep if minimum <= remaining
pub struct TimeUntilReviewFilter {
    fraction: f64,
}

impl TimeUntilReviewFilter {
    /// Create a new TimeUntilReviewFilter.
    ///
    /// # Arguments
    /// * `percent` - Share of the interval that must remain; clamped to 0-100
    pub fn new(percent: f64) -> Self {
        Self {
            fraction: percent.clamp(0.0, 100.0) / 100.0,
        }
    }

    pub fn from_value(value: &FilterValue) -> Result<Self> {
        Ok(Self::new(number_value(NAME, value)?))
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

fn build(value: &FilterValue) -> Result<Box<dyn ItemFilter>> {
    Ok(Box::new(TimeUntilReviewFilter::from_value(value)?))
}

pub fn descriptor() -> FilterDescriptor {
    FilterDescriptor {
        name: NAME,
        label: LABEL,
        kind: FilterValueKind::Number,
        default_value: FilterValue::Number(DEFAULT_PERCENT),
        placeholder: Some(PLACEHOLDER),
        hover_tip: HOVER_TIP,
        required_fields: RequiredFields::ASSIGNMENTS,
        constructor: build,
    }
}

impl ItemFilter for TimeUntilReviewFilter {
    fn name(&self) -> &str {
        NAME
    }

    fn required_fields(&self) -> RequiredFields {
        RequiredFields::ASSIGNMENTS
    }

    fn matches(&self, item: &Item, context: &EvaluationContext) -> bool {
        let Some(assignment) = &item.assignments else {
            return false;
        };

        match assignment.srs_stage {
            LESSON_STAGE => false,
            BURNED_STAGE => true,
            _ => {
                let (Some(interval), Some(available_at)) = (
                    srs::assignment_interval_hours(assignment),
                    assignment.available_at,
                ) else {
                    return false;
                };
                let minimum_remaining = interval as f64 * self.fraction;
                minimum_remaining <= context.hours_until(available_at)
            }
        }
    }
}
