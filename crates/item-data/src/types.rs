//! Core domain types for WaniKani item exports.
//!
//! An item is a subject (radical, kanji or vocabulary) together with the
//! user's progress on it. The progress parts are optional: the host only
//! attaches `assignments` and `review_statistics` when a filter asks for
//! them, and an item the user never unlocked has neither.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Unique identifier for a subject
pub type ItemId = u32;

/// SRS stage of an item still sitting in the lesson queue
pub const LESSON_STAGE: u8 = 0;

/// Terminal SRS stage; burned items are never reviewed again
pub const BURNED_STAGE: u8 = 9;

// =============================================================================
// Item
// =============================================================================

/// One learning unit as handed over by the item registry.
///
/// Filters only ever borrow items; nothing in this workspace mutates one
/// after it has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Subject type, e.g. "radical", "kanji", "vocabulary"
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub data: SubjectData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Assignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_statistics: Option<ReviewStatistics>,
}

impl Item {
    /// Create a bare item with no progress attached
    pub fn new(id: ItemId, characters: impl Into<String>) -> Self {
        Self {
            id,
            object: None,
            data: SubjectData {
                characters: Some(characters.into()),
            },
            assignments: None,
            review_statistics: None,
        }
    }

    /// Attach an assignment (builder style, used heavily in tests)
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignments = Some(assignment);
        self
    }

    /// Attach review statistics (builder style)
    pub fn with_review_statistics(mut self, stats: ReviewStatistics) -> Self {
        self.review_statistics = Some(stats);
        self
    }

    /// The item's characters, if it has a textual representation.
    ///
    /// Some radicals are image-only and carry no characters at all.
    pub fn characters(&self) -> Option<&str> {
        self.data.characters.as_deref()
    }

    /// Current SRS stage, if the item has an assignment
    pub fn srs_stage(&self) -> Option<u8> {
        self.assignments.as_ref().map(|a| a.srs_stage)
    }
}

/// Static subject data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectData {
    #[serde(default)]
    pub characters: Option<String>,
}

// =============================================================================
// Progress
// =============================================================================

/// The user's assignment for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// When the lesson was taken; `None` while still in the lesson queue
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// 0 (lesson queue) through 9 (burned)
    #[serde(default)]
    pub srs_stage: u8,
    /// Curriculum level; levels 1 and 2 use the accelerated interval table
    #[serde(default)]
    pub level: u32,
    /// When the next review unlocks; `None` for lessons and burned items
    #[serde(default)]
    pub available_at: Option<DateTime<Utc>>,
}

/// Cumulative review results for a subject.
///
/// A streak of 1 means the last answer on that axis was a miss followed
/// by nothing yet, i.e. the item was just answered incorrectly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStatistics {
    #[serde(default)]
    pub meaning_incorrect: u32,
    #[serde(default)]
    pub meaning_current_streak: u32,
    #[serde(default)]
    pub reading_incorrect: u32,
    #[serde(default)]
    pub reading_current_streak: u32,
}

/// The two answer axes tracked by review statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Meaning,
    Reading,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Meaning, Axis::Reading];
}

impl ReviewStatistics {
    /// Incorrect count on one axis
    pub fn incorrect(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Meaning => self.meaning_incorrect,
            Axis::Reading => self.reading_incorrect,
        }
    }

    /// Current streak on one axis
    pub fn current_streak(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Meaning => self.meaning_current_streak,
            Axis::Reading => self.reading_current_streak,
        }
    }
}
