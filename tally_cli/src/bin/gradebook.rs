//! # GradeBook Analyzer
//!
//! One-shot pipeline: collect a roster of (student, mark) pairs, then
//! print the grade analysis (per-student letter grades, average, median,
//! extremes, pass/fail split).

use tally_cli::init_logging;
use tally_cli::prompt::{read_non_negative, read_nonempty, read_positive_count};
use tally_core::report::GradeReport;

fn main() {
    init_logging();
    println!("=== GradeBook Analyzer ===");

    let Some(count) = read_positive_count("Enter number of students: ", "students") else {
        return;
    };

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(name) = read_nonempty("Enter name of student: ") else {
            return;
        };
        let prompt = format!("Enter marks of {}: ", name);
        let Some(mark) = read_non_negative(&prompt, "marks") else {
            return;
        };
        entries.push((name, mark));
    }

    println!();
    print!("{}", GradeReport::new(entries).render());
}
