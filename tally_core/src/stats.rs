//! # Aggregate Statistics
//!
//! Pure functions over numeric samples, shared by the gradebook and
//! calorie report builders. All outputs are plain numbers or small
//! serializable enums.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::stats::{mean, median, Grade};
//!
//! let marks = [90.0, 80.0, 70.0, 60.0];
//! assert_eq!(mean(&marks), 75.0);
//! assert_eq!(median(&marks), 75.0);
//! assert_eq!(Grade::from_mark(90.0), Grade::A);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum mark to count as a pass.
pub const PASS_MARK: f64 = 40.0;

/// Sum of all samples.
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        total(values) / values.len() as f64
    }
}

/// Median over a sorted copy; even counts average the middle pair.
/// Returns 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Largest sample, or `None` for an empty slice.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Smallest sample, or `None` for an empty slice.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Letter grade on the fixed 90/80/70/60 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_mark(mark: f64) -> Self {
        if mark >= 90.0 {
            Grade::A
        } else if mark >= 80.0 {
            Grade::B
        } else if mark >= 70.0 {
            Grade::C
        } else if mark >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Count of marks at or above [`PASS_MARK`], paired with the failures.
pub fn pass_fail_counts(marks: &[f64]) -> (usize, usize) {
    let passed = marks.iter().filter(|&&m| m >= PASS_MARK).count();
    (passed, marks.len() - passed)
}

/// Comparison of a running total against a daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStatus {
    WithinLimit,
    Exceeded,
}

impl LimitStatus {
    /// Exceeded iff the total is strictly above the limit.
    pub fn of(total: f64, limit: f64) -> Self {
        if total > limit {
            LimitStatus::Exceeded
        } else {
            LimitStatus::WithinLimit
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitStatus::WithinLimit => write!(f, "Within limit"),
            LimitStatus::Exceeded => write!(f, "EXCEEDED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradebook_scenario() {
        // marks [90, 80, 70, 60]
        let marks = [90.0, 80.0, 70.0, 60.0];
        assert_eq!(total(&marks), 300.0);
        assert_eq!(mean(&marks), 75.0);
        assert_eq!(median(&marks), 75.0);
        assert_eq!(max(&marks), Some(90.0));
        assert_eq!(min(&marks), Some(60.0));

        let grades: Vec<Grade> = marks.iter().map(|&m| Grade::from_mark(m)).collect();
        assert_eq!(grades, vec![Grade::A, Grade::B, Grade::C, Grade::D]);

        assert_eq!(pass_fail_counts(&marks), (4, 0));
    }

    #[test]
    fn test_calorie_scenario() {
        let calories = [300.0, 450.0];
        assert_eq!(total(&calories), 750.0);
        assert_eq!(mean(&calories), 375.0);
        assert_eq!(LimitStatus::of(total(&calories), 700.0), LimitStatus::Exceeded);
    }

    #[test]
    fn test_limit_boundary_is_within() {
        assert_eq!(LimitStatus::of(700.0, 700.0), LimitStatus::WithinLimit);
        assert_eq!(LimitStatus::of(700.0, 700.0).to_string(), "Within limit");
        assert_eq!(LimitStatus::of(700.1, 700.0).to_string(), "EXCEEDED");
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let marks = [90.0, 60.0, 70.0];
        let _ = median(&marks);
        assert_eq!(marks, [90.0, 60.0, 70.0]);
    }

    #[test]
    fn test_empty_slices() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(pass_fail_counts(&[]), (0, 0));
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_mark(89.9), Grade::B);
        assert_eq!(Grade::from_mark(60.0), Grade::D);
        assert_eq!(Grade::from_mark(59.9), Grade::F);
        assert_eq!(Grade::from_mark(39.9), Grade::F);
    }

    #[test]
    fn test_pass_mark_boundary() {
        assert_eq!(pass_fail_counts(&[40.0, 39.99]), (1, 1));
    }
}
