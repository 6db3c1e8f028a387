//! Filter implementations.
//!
//! Each module holds one predicate together with its registry descriptor
//! (name, label, default threshold, hover help) and its value map.

pub mod failed_last_review;
pub mod leech_training;
pub mod recent_lessons;
pub mod related_items;
pub mod time_until_review;

// Re-export for convenience
pub use failed_last_review::FailedLastReviewFilter;
pub use leech_training::LeechTrainingFilter;
pub use recent_lessons::RecentLessonsFilter;
pub use related_items::{CharacterSets, RelatedItemsFilter};
pub use time_until_review::TimeUntilReviewFilter;

use crate::error::{FilterError, Result};
use crate::value::{FilterValue, FilterValueKind};

/// Map a raw threshold to a finite number, or report which filter rejected it
pub(crate) fn number_value(filter: &str, value: &FilterValue) -> Result<f64> {
    value.as_number().ok_or_else(|| FilterError::InvalidValue {
        filter: filter.to_string(),
        expected: FilterValueKind::Number,
        value: value.to_string(),
    })
}
