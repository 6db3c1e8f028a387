//! Per-pass evaluation context.
//!
//! Every time-based filter compares item timestamps against "now". Reading
//! the clock once per item would let a long pass drift, so the pipeline
//! captures a single instant before the first item and hands the same
//! context to every predicate call of that pass.

use chrono::{DateTime, Utc};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Immutable state shared by all predicate calls of one filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    now: DateTime<Utc>,
}

impl EvaluationContext {
    /// Capture the wall clock for a new pass
    pub fn prepare() -> Self {
        Self::at(Utc::now())
    }

    /// Evaluate a pass as of a fixed instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Fractional hours elapsed from `then` to now (negative if `then` is in the future)
    pub fn hours_since(&self, then: DateTime<Utc>) -> f64 {
        (self.now - then).num_milliseconds() as f64 / MS_PER_HOUR
    }

    /// Fractional hours from now until `when` (negative if already past)
    pub fn hours_until(&self, when: DateTime<Utc>) -> f64 {
        (when - self.now).num_milliseconds() as f64 / MS_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_hours_since_and_until() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let context = EvaluationContext::at(now);

        assert_eq!(context.hours_since(now - Duration::minutes(90)), 1.5);
        assert_eq!(context.hours_until(now + Duration::hours(6)), 6.0);
        assert_eq!(context.hours_until(now - Duration::hours(2)), -2.0);
    }

    #[test]
    fn test_prepare_is_stable_for_the_pass() {
        let context = EvaluationContext::prepare();
        let copy = context;
        assert_eq!(context.now(), copy.now());
    }
}
