//! Filter for items missed on their most recent review.
//!
//! Review history isn't part of the item data, so the time of the last
//! review is reconstructed from the next review time and the interval
//! of the current stage.

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::filters::number_value;
use crate::registry::FilterDescriptor;
use crate::srs;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use chrono::{DateTime, Duration, Utc};
use item_data::{Assignment, Axis, Item, ReviewStatistics};

pub const NAME: &str = "failed_last_review";
const LABEL: &str = "Failed Last Review";
const PLACEHOLDER: &str = "Hours";
const HOVER_TIP: &str = "Only include items whose most recent review was answered \
incorrectly within the last X hours.";
const DEFAULT_HOURS: f64 = 24.0;

/// Axes whose last answer was a miss (`incorrect > 0` and streak of exactly 1)
pub fn failed_axes(stats: &ReviewStatistics) -> Vec<Axis> {
    Axis::ALL
        .into_iter()
        .filter(|&axis| stats.incorrect(axis) > 0 && stats.current_streak(axis) == 1)
        .collect()
}

/// When the last review happened, reconstructed as `available_at - interval`.
///
/// `None` for lessons, burned items and assignments without `available_at`.
pub fn last_review_at(assignment: &Assignment) -> Option<DateTime<Utc>> {
    let interval = srs::assignment_interval_hours(assignment)?;
    let available_at = assignment.available_at?;
    Some(available_at - Duration::hours(i64::from(interval)))
}

/// Keeps items missed on their last review no more than `max_hours` ago.
///
/// ## Algorithm
/// 1. Stage 0 and stage 9 are excluded (no review to speak of)
/// 2. At least one axis must have `incorrect > 0` and a streak of 1
/// 3. Reconstruct the last review time from `available_at`
/// 4. Keep if hours since then <= max_hours
pub struct FailedLastReviewFilter {
    max_hours: f64,
}

impl FailedLastReviewFilter {
    pub fn new(max_hours: f64) -> Self {
        Self { max_hours }
    }

    pub fn from_value(value: &FilterValue) -> Result<Self> {
        Ok(Self::new(number_value(NAME, value)?))
    }
}

fn build(value: &FilterValue) -> Result<Box<dyn ItemFilter>> {
    Ok(Box::new(FailedLastReviewFilter::from_value(value)?))
}

pub fn descriptor() -> FilterDescriptor {
    FilterDescriptor {
        name: NAME,
        label: LABEL,
        kind: FilterValueKind::Number,
        default_value: FilterValue::Number(DEFAULT_HOURS),
        placeholder: Some(PLACEHOLDER),
        hover_tip: HOVER_TIP,
        required_fields: RequiredFields::ALL,
        constructor: build,
    }
}

impl ItemFilter for FailedLastReviewFilter {
    fn name(&self) -> &str {
        NAME
    }

    fn required_fields(&self) -> RequiredFields {
        RequiredFields::ALL
    }

    fn matches(&self, item: &Item, context: &EvaluationContext) -> bool {
        let (Some(assignment), Some(stats)) = (&item.assignments, &item.review_statistics) else {
            return false;
        };

        if failed_axes(stats).is_empty() {
            return false;
        }

        // Also rules out stage 0 and stage 9, which have no interval
        match last_review_at(assignment) {
            Some(last_review) => context.hours_since(last_review) <= self.max_hours,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    /// Item at `stage` on a regular level whose last review was `hours_ago`
    fn reviewed(stage: u8, hours_ago: i64, stats: ReviewStatistics) -> Item {
        let interval = srs::interval_hours(stage, 10).unwrap_or(0) as i64;
        Item::new(1, "曜")
            .with_assignment(Assignment {
                started_at: Some(now() - Duration::days(60)),
                srs_stage: stage,
                level: 10,
                available_at: Some(now() - Duration::hours(hours_ago) + Duration::hours(interval)),
            })
            .with_review_statistics(stats)
    }

    fn missed_meaning() -> ReviewStatistics {
        ReviewStatistics {
            meaning_incorrect: 2,
            meaning_current_streak: 1,
            reading_incorrect: 0,
            reading_current_streak: 5,
        }
    }

    #[test]
    fn test_failed_last_review_filter() {
        let context = EvaluationContext::at(now());
        let filter = FailedLastReviewFilter::new(24.0);

        assert!(filter.matches(&reviewed(2, 3, missed_meaning()), &context));
        assert!(filter.matches(&reviewed(2, 24, missed_meaning()), &context));
        assert!(!filter.matches(&reviewed(2, 25, missed_meaning()), &context));
    }

    #[test]
    fn test_requires_a_fresh_miss() {
        let context = EvaluationContext::at(now());
        let filter = FailedLastReviewFilter::new(24.0);

        let recovered = ReviewStatistics {
            meaning_incorrect: 2,
            meaning_current_streak: 2,
            reading_incorrect: 0,
            reading_current_streak: 1,
        };
        assert!(failed_axes(&recovered).is_empty());
        assert!(!filter.matches(&reviewed(3, 1, recovered), &context));
    }

    #[test]
    fn test_lesson_and_burned_excluded() {
        let context = EvaluationContext::at(now());
        let filter = FailedLastReviewFilter::new(f64::MAX);

        assert!(!filter.matches(&reviewed(0, 1, missed_meaning()), &context));
        assert!(!filter.matches(&reviewed(9, 1, missed_meaning()), &context));
    }

    #[test]
    fn test_last_review_reconstruction_uses_accelerated_table() {
        let available_at = now();
        let assignment = Assignment {
            started_at: None,
            srs_stage: 3,
            level: 1,
            available_at: Some(available_at),
        };
        assert_eq!(
            last_review_at(&assignment),
            Some(available_at - Duration::hours(8))
        );
    }

    #[test]
    fn test_missing_sections_excluded() {
        let context = EvaluationContext::at(now());
        let filter = FailedLastReviewFilter::new(24.0);

        let mut no_stats = reviewed(2, 1, missed_meaning());
        no_stats.review_statistics = None;
        let mut no_assignment = reviewed(2, 1, missed_meaning());
        no_assignment.assignments = None;

        assert!(!filter.matches(&no_stats, &context));
        assert!(!filter.matches(&no_assignment, &context));
    }
}
