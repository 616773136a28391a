//! # Meal Log
//!
//! Simpler calorie tracker variant: same collection flow as `calories`,
//! but the report always lands in a fixed `meal_report.txt` next to the
//! working directory, overwriting the previous session.

use std::path::Path;

use tally_cli::init_logging;
use tally_cli::prompt::{read_non_negative, read_nonempty, read_positive_count};
use tally_core::report::{write_text_report, CalorieReport};

const REPORT_FILE: &str = "meal_report.txt";

fn main() {
    init_logging();
    println!("=== Meal Log ===");

    let Some(count) = read_positive_count("How many meals did you have? ", "meals") else {
        return;
    };

    let mut entries = Vec::with_capacity(count);
    for i in 1..=count {
        let prompt = format!("Meal {} name: ", i);
        let Some(name) = read_nonempty(&prompt) else {
            return;
        };
        let prompt = format!("Calories for '{}': ", name);
        let Some(calories) = read_non_negative(&prompt, "calories") else {
            return;
        };
        entries.push((name, calories));
    }

    let Some(limit) = read_non_negative("Enter your daily calorie limit: ", "daily limit") else {
        return;
    };

    let report = CalorieReport::new(entries, limit);
    println!();
    print!("{}", report.render());

    match write_text_report(Path::new(REPORT_FILE), &report.render()) {
        Ok(()) => println!("Report written to {}", REPORT_FILE),
        Err(e) => println!("Error: {}", e),
    }
}
