//! Filter for lessons taken recently.
//!
//! Keeps items whose lesson was started less than X hours ago, which is
//! handy for drilling a fresh batch before its first reviews.

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::filters::number_value;
use crate::registry::FilterDescriptor;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use item_data::Item;

pub const NAME: &str = "recent_lessons";
const LABEL: &str = "Recent Lessons";
const HOVER_TIP: &str = "Filter items to show lessons taken in the last X hours.";
const DEFAULT_HOURS: f64 = 24.0;

/// Keeps items whose lesson started strictly less than `max_hours` ago.
///
/// ## Algorithm
/// 1. Items without an assignment or a `started_at` are excluded
/// 2. Hours since `started_at` are measured against the pass's "now"
/// 3. Keep if elapsed < max_hours
pub struct RecentLessonsFilter {
    max_hours: f64,
}

impl RecentLessonsFilter {
    /// Create a new RecentLessonsFilter.
    ///
    /// # Arguments
    /// * `max_hours` - Exclusive upper bound on hours since the lesson (typically 24)
    pub fn new(max_hours: f64) -> Self {
        Self { max_hours }
    }

    /// Value map: the threshold is a plain number of hours
    pub fn from_value(value: &FilterValue) -> Result<Self> {
        Ok(Self::new(number_value(NAME, value)?))
    }
}

fn build(value: &FilterValue) -> Result<Box<dyn ItemFilter>> {
    Ok(Box::new(RecentLessonsFilter::from_value(value)?))
}

pub fn descriptor() -> FilterDescriptor {
    FilterDescriptor {
        name: NAME,
        label: LABEL,
        kind: FilterValueKind::Number,
        default_value: FilterValue::Number(DEFAULT_HOURS),
        placeholder: None,
        hover_tip: HOVER_TIP,
        required_fields: RequiredFields::ASSIGNMENTS,
        constructor: build,
    }
}

impl ItemFilter for RecentLessonsFilter {
    fn name(&self) -> &str {
        NAME
    }

    fn required_fields(&self) -> RequiredFields {
        RequiredFields::ASSIGNMENTS
    }

    fn matches(&self, item: &Item, context: &EvaluationContext) -> bool {
        let Some(started_at) = item.assignments.as_ref().and_then(|a| a.started_at) else {
            return false;
        };
        context.hours_since(started_at) < self.max_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use item_data::Assignment;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn started(hours_ago: i64) -> Item {
        Item::new(1, "金").with_assignment(Assignment {
            started_at: Some(now() - Duration::hours(hours_ago)),
            srs_stage: 1,
            level: 5,
            available_at: None,
        })
    }

    #[test]
    fn test_recent_lessons_filter() {
        let context = EvaluationContext::at(now());
        let filter = RecentLessonsFilter::new(24.0);

        assert!(filter.matches(&started(1), &context));
        assert!(filter.matches(&started(23), &context));
        // Bound is exclusive
        assert!(!filter.matches(&started(24), &context));
        assert!(!filter.matches(&started(72), &context));
    }

    #[test]
    fn test_unstarted_items_excluded() {
        let context = EvaluationContext::at(now());
        let filter = RecentLessonsFilter::new(1_000_000.0);

        let no_assignment = Item::new(2, "曜");
        let in_lesson_queue = Item::new(3, "日").with_assignment(Assignment {
            started_at: None,
            srs_stage: 0,
            level: 5,
            available_at: None,
        });

        assert!(!filter.matches(&no_assignment, &context));
        assert!(!filter.matches(&in_lesson_queue, &context));
    }

    #[test]
    fn test_value_map() {
        assert!(RecentLessonsFilter::from_value(&FilterValue::from("48")).is_ok());
        assert!(RecentLessonsFilter::from_value(&FilterValue::from("soon")).is_err());
    }
}
