//! SRS interval lookup.
//!
//! The hours an item must wait at each stage before its next review.
//! Early levels run on a faster schedule for stages 1-4.

use item_data::{Assignment, BURNED_STAGE, LESSON_STAGE};

/// Hours until the next review, indexed by SRS stage
pub const SRS_INTERVALS: [u32; 9] = [0, 4, 8, 23, 47, 167, 335, 719, 2879];

/// Hours until the next review on accelerated levels
pub const ACCELERATED_SRS_INTERVALS: [u32; 9] = [0, 2, 4, 8, 23, 167, 335, 719, 2879];

/// Levels that use the accelerated table
pub const ACCELERATED_LEVELS: [u32; 2] = [1, 2];

pub fn is_accelerated_level(level: u32) -> bool {
    ACCELERATED_LEVELS.contains(&level)
}

/// Interval table that applies at `level`
pub fn intervals_for_level(level: u32) -> &'static [u32; 9] {
    if is_accelerated_level(level) {
        &ACCELERATED_SRS_INTERVALS
    } else {
        &SRS_INTERVALS
    }
}

/// Hours required at `stage` before the next review.
///
/// `None` for the lesson stage and for burned (or out-of-range) stages:
/// neither has an interval to reason about.
pub fn interval_hours(stage: u8, level: u32) -> Option<u32> {
    if stage == LESSON_STAGE || stage >= BURNED_STAGE {
        return None;
    }
    intervals_for_level(level).get(stage as usize).copied()
}

/// Interval for an assignment's current stage and level
pub fn assignment_interval_hours(assignment: &Assignment) -> Option<u32> {
    interval_hours(assignment.srs_stage, assignment.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_intervals() {
        assert_eq!(interval_hours(1, 10), Some(4));
        assert_eq!(interval_hours(4, 10), Some(47));
        assert_eq!(interval_hours(8, 60), Some(2879));
    }

    #[test]
    fn test_accelerated_level_uses_accelerated_table() {
        for level in ACCELERATED_LEVELS {
            assert_eq!(interval_hours(3, level), Some(ACCELERATED_SRS_INTERVALS[3]));
            assert_ne!(interval_hours(3, level), Some(SRS_INTERVALS[3]));
        }
        assert_eq!(interval_hours(3, 3), Some(SRS_INTERVALS[3]));
    }

    #[test]
    fn test_sentinel_stages_have_no_interval() {
        assert_eq!(interval_hours(LESSON_STAGE, 5), None);
        assert_eq!(interval_hours(BURNED_STAGE, 5), None);
        assert_eq!(interval_hours(42, 5), None);
    }

    #[test]
    fn test_tables_agree_from_guru_upward() {
        // Stage 5 onwards the schedules converge
        assert_eq!(SRS_INTERVALS[5..], ACCELERATED_SRS_INTERVALS[5..]);
    }
}
