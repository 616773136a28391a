//! # Report Formatting
//!
//! Builds the plain-text reports printed by the one-shot tools. Each
//! report renders to a `String` so the caller decides whether it goes to
//! stdout, a file, or both.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::report::CalorieReport;
//!
//! let report = CalorieReport::new(
//!     vec![("Breakfast".to_string(), 300.0), ("Lunch".to_string(), 450.0)],
//!     700.0,
//! );
//! let text = report.render();
//! assert!(text.contains("EXCEEDED"));
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::errors::{TallyError, TallyResult};
use crate::stats::{self, Grade, LimitStatus};

/// Width of the name column in tabular reports.
const NAME_COL: usize = 20;
/// Width of the numeric column in tabular reports.
const NUM_COL: usize = 10;

/// Grade analysis over a set of (student, mark) entries.
#[derive(Debug, Clone)]
pub struct GradeReport {
    entries: Vec<(String, f64)>,
}

impl GradeReport {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        GradeReport { entries }
    }

    fn marks(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, m)| *m).collect()
    }

    /// Per-student letter grades, in entry order.
    pub fn grades(&self) -> Vec<Grade> {
        self.entries
            .iter()
            .map(|(_, m)| Grade::from_mark(*m))
            .collect()
    }

    /// Render the full analysis: one line per student, then the
    /// aggregate section.
    pub fn render(&self) -> String {
        let marks = self.marks();
        let (passed, failed) = stats::pass_fail_counts(&marks);

        let mut out = String::new();
        out.push_str("--- Result ---\n");
        for (name, mark) in &self.entries {
            out.push_str(&format!("{} - {:.1} - {}\n", name, mark, Grade::from_mark(*mark)));
        }
        out.push('\n');
        out.push_str(&format!("Total Students: {}\n", self.entries.len()));
        out.push_str(&format!("Average Marks: {:.1}\n", stats::mean(&marks)));
        out.push_str(&format!("Median Marks: {:.1}\n", stats::median(&marks)));
        out.push_str(&format!(
            "Highest Marks: {:.1}\n",
            stats::max(&marks).unwrap_or(0.0)
        ));
        out.push_str(&format!(
            "Lowest Marks: {:.1}\n",
            stats::min(&marks).unwrap_or(0.0)
        ));
        out.push_str(&format!("Passed Students: {}\n", passed));
        out.push_str(&format!("Failed Students: {}\n", failed));
        out
    }
}

/// Calorie summary over a set of (meal, calories) entries and a daily
/// limit.
#[derive(Debug, Clone)]
pub struct CalorieReport {
    entries: Vec<(String, f64)>,
    daily_limit: f64,
}

impl CalorieReport {
    pub fn new(entries: Vec<(String, f64)>, daily_limit: f64) -> Self {
        CalorieReport {
            entries,
            daily_limit,
        }
    }

    pub fn total(&self) -> f64 {
        stats::total(&self.calories())
    }

    pub fn average(&self) -> f64 {
        stats::mean(&self.calories())
    }

    pub fn status(&self) -> LimitStatus {
        LimitStatus::of(self.total(), self.daily_limit)
    }

    fn calories(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }

    /// Render the summary table: header, one row per meal, separators,
    /// totals, and the limit line.
    pub fn render(&self) -> String {
        let rule = "-".repeat(NAME_COL + NUM_COL + 2);

        let mut out = String::new();
        out.push_str("--- Summary Report ---\n");
        out.push_str(&format!(
            "{:<width$}{:>num$}\n",
            "Meal Name",
            "Calories",
            width = NAME_COL,
            num = NUM_COL
        ));
        out.push_str(&rule);
        out.push('\n');
        for (meal, cal) in &self.entries {
            out.push_str(&format!(
                "{:<width$}{:>num$.2}\n",
                meal,
                cal,
                width = NAME_COL,
                num = NUM_COL
            ));
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<width$}{:>num$.2}\n",
            "Total:",
            self.total(),
            width = NAME_COL,
            num = NUM_COL
        ));
        out.push_str(&format!(
            "{:<width$}{:>num$.2}\n",
            "Average per meal:",
            self.average(),
            width = NAME_COL,
            num = NUM_COL
        ));
        out.push_str(&format!(
            "Daily limit: {:.2}   Status: {}\n",
            self.daily_limit,
            self.status()
        ));
        out
    }

    /// Render with a session header, for the saved-to-file variant.
    pub fn render_session(&self, now: DateTime<Local>) -> String {
        format!(
            "Daily Calorie Tracker Session\nDate: {}\n\n{}",
            now.to_rfc3339(),
            self.render()
        )
    }
}

/// File name of the form `<prefix>_YYYYmmdd_HHMMSS.txt`.
pub fn timestamped_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.txt", prefix, now.format("%Y%m%d_%H%M%S"))
}

/// Write a finished report to a plain text file in one operation.
pub fn write_text_report(path: &Path, contents: &str) -> TallyResult<()> {
    fs::write(path, contents).map_err(|e| {
        TallyError::file_error("write report", path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::env::temp_dir;

    fn entries(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(n, v)| (n.to_string(), *v)).collect()
    }

    #[test]
    fn test_grade_report_scenario() {
        let report = GradeReport::new(entries(&[
            ("Ann", 90.0),
            ("Ben", 80.0),
            ("Cal", 70.0),
            ("Dee", 60.0),
        ]));

        assert_eq!(
            report.grades(),
            vec![Grade::A, Grade::B, Grade::C, Grade::D]
        );

        let text = report.render();
        assert!(text.contains("Ann - 90.0 - A"));
        assert!(text.contains("Dee - 60.0 - D"));
        assert!(text.contains("Total Students: 4"));
        assert!(text.contains("Average Marks: 75.0"));
        assert!(text.contains("Median Marks: 75.0"));
        assert!(text.contains("Highest Marks: 90.0"));
        assert!(text.contains("Lowest Marks: 60.0"));
        assert!(text.contains("Passed Students: 4"));
        assert!(text.contains("Failed Students: 0"));
    }

    #[test]
    fn test_calorie_report_scenario() {
        let report = CalorieReport::new(
            entries(&[("Breakfast", 300.0), ("Lunch", 450.0)]),
            700.0,
        );

        assert_eq!(report.total(), 750.0);
        assert_eq!(report.average(), 375.0);
        assert_eq!(report.status(), LimitStatus::Exceeded);

        let text = report.render();
        assert!(text.contains("Breakfast               300.00"));
        assert!(text.contains("Total:                  750.00"));
        assert!(text.contains("Average per meal:       375.00"));
        assert!(text.contains("Daily limit: 700.00   Status: EXCEEDED"));
    }

    #[test]
    fn test_calorie_report_within_limit() {
        let report = CalorieReport::new(entries(&[("Soup", 200.0)]), 700.0);
        assert!(report.render().contains("Status: Within limit"));
    }

    #[test]
    fn test_session_render_carries_date_header() {
        let now = Local.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let report = CalorieReport::new(entries(&[("Soup", 200.0)]), 700.0);
        let text = report.render_session(now);
        assert!(text.starts_with("Daily Calorie Tracker Session\nDate: 2026-08-25T12:00:00"));
        assert!(text.contains("--- Summary Report ---"));
    }

    #[test]
    fn test_timestamped_filename() {
        let now = Local.with_ymd_and_hms(2026, 8, 25, 9, 5, 7).unwrap();
        assert_eq!(
            timestamped_filename("calorie_log", now),
            "calorie_log_20260825_090507.txt"
        );
    }

    #[test]
    fn test_write_text_report() {
        let path = temp_dir().join("tally_test_report.txt");
        write_text_report(&path, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        let _ = fs::remove_file(&path);
    }
}
