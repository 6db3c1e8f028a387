//! Filter for leeches: items that keep getting answered wrong.

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::filters::number_value;
use crate::registry::FilterDescriptor;
use crate::traits::{ItemFilter, RequiredFields};
use crate::value::{FilterValue, FilterValueKind};
use item_data::{Axis, Item, ReviewStatistics};

pub const NAME: &str = "leech_training";
const LABEL: &str = "Leech Training";
const PLACEHOLDER: &str = "Leech Ratio";
const HOVER_TIP: &str = "Only include leeches. Formula: incorrect / currentStreak^1.5.\n \
* Setting the value to 1 will include items that have just been answered incorrectly for the first time.\n \
* Setting the value to 1.01 will exclude items that have just been answered incorrectly for the first time.\n \
* The higher the value, the fewer items will be included as leeches.";
const DEFAULT_SCORE: f64 = 1.0;

/// Streak used in place of zero, so never-correct items score high
const ZERO_STREAK_SUBSTITUTE: f64 = 0.5;

/// Leech score for one axis: `incorrect / streak^1.5`, a zero streak counting as 0.5.
pub fn leech_score(incorrect: u32, current_streak: u32) -> f64 {
    let streak = if current_streak == 0 {
        ZERO_STREAK_SUBSTITUTE
    } else {
        current_streak as f64
    };
    incorrect as f64 / streak.powf(1.5)
}

/// Score of one axis of an item's review statistics
pub fn axis_score(stats: &ReviewStatistics, axis: Axis) -> f64 {
    leech_score(stats.incorrect(axis), stats.current_streak(axis))
}

/// Keeps items whose meaning or reading leech score reaches `min_score`.
///
/// Higher thresholds are stricter.
pub struct LeechTrainingFilter {
    min_score: f64,
}

impl LeechTrainingFilter {
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }

    pub fn from_value(value: &FilterValue) -> Result<Self> {
        Ok(Self::new(number_value(NAME, value)?))
    }
}

fn build(value: &FilterValue) -> Result<Box<dyn ItemFilter>> {
    Ok(Box::new(LeechTrainingFilter::from_value(value)?))
}

pub fn descriptor() -> FilterDescriptor {
    FilterDescriptor {
        name: NAME,
        label: LABEL,
        kind: FilterValueKind::Number,
        default_value: FilterValue::Number(DEFAULT_SCORE),
        placeholder: Some(PLACEHOLDER),
        hover_tip: HOVER_TIP,
        required_fields: RequiredFields::REVIEW_STATISTICS,
        constructor: build,
    }
}

impl ItemFilter for LeechTrainingFilter {
    fn name(&self) -> &str {
        NAME
    }

    fn required_fields(&self) -> RequiredFields {
        RequiredFields::REVIEW_STATISTICS
    }

    fn matches(&self, item: &Item, _context: &EvaluationContext) -> bool {
        let Some(stats) = &item.review_statistics else {
            return false;
        };
        Axis::ALL
            .iter()
            .any(|&axis| axis_score(stats, axis) >= self.min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_stats(meaning: (u32, u32), reading: (u32, u32)) -> Item {
        Item::new(1, "曜").with_review_statistics(ReviewStatistics {
            meaning_incorrect: meaning.0,
            meaning_current_streak: meaning.1,
            reading_incorrect: reading.0,
            reading_current_streak: reading.1,
        })
    }

    #[test]
    fn test_single_fresh_miss_scores_one() {
        assert_eq!(leech_score(1, 1), 1.0);
    }

    #[test]
    fn test_threshold_edge_at_one() {
        let context = EvaluationContext::prepare();
        let item = with_stats((1, 1), (0, 3));

        assert!(LeechTrainingFilter::new(1.0).matches(&item, &context));
        assert!(!LeechTrainingFilter::new(1.01).matches(&item, &context));
    }

    #[test]
    fn test_zero_streak_is_penalized() {
        // 1 / 0.5^1.5 ≈ 2.83
        let score = leech_score(1, 0);
        assert!((score - 2.828_427).abs() < 1e-5);
        assert_eq!(leech_score(0, 0), 0.0);
    }

    #[test]
    fn test_score_monotonicity() {
        for incorrect in 0..20 {
            for streak in 0..20 {
                assert!(leech_score(incorrect, streak + 1) <= leech_score(incorrect, streak));
                assert!(leech_score(incorrect + 1, streak) >= leech_score(incorrect, streak));
            }
        }
    }

    #[test]
    fn test_either_axis_qualifies() {
        let context = EvaluationContext::prepare();
        let filter = LeechTrainingFilter::new(2.0);

        assert!(filter.matches(&with_stats((0, 8), (6, 2)), &context));
        assert!(filter.matches(&with_stats((6, 2), (0, 8)), &context));
        assert!(!filter.matches(&with_stats((1, 4), (2, 4)), &context));
    }

    #[test]
    fn test_missing_review_statistics_excluded() {
        let context = EvaluationContext::prepare();
        assert!(!LeechTrainingFilter::new(0.0).matches(&Item::new(2, "金"), &context));
    }
}
