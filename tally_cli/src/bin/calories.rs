//! # Daily Calorie Tracker
//!
//! Logs a session of meals, compares the total against a daily limit, and
//! optionally saves the report under a timestamped file name
//! (`calorie_log_YYYYmmdd_HHMMSS.txt`).

use std::path::Path;

use chrono::Local;
use tally_cli::init_logging;
use tally_cli::prompt::{read_non_negative, read_positive_count, read_trimmed};
use tally_core::report::{timestamped_filename, write_text_report, CalorieReport};

fn main() {
    init_logging();
    println!("=== Daily Calorie Tracker ===");
    println!("Log your meals, compute total & average calories, compare with a daily limit, and optionally save the report.");
    println!();

    let Some(count) = read_positive_count("How many meals do you want to enter? ", "meals") else {
        return;
    };

    let mut entries = Vec::with_capacity(count);
    for i in 1..=count {
        let Some(name) = read_trimmed(&format!("Meal {} name: ", i)) else {
            return;
        };
        // Blank names get a placeholder so the table stays readable
        let name = if name.is_empty() {
            format!("Meal_{}", i)
        } else {
            name
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

    println!();
    let Some(answer) = read_trimmed("Do you want to save this report to a text file? (y/n): ")
    else {
        return;
    };
    if answer.to_lowercase().starts_with('y') {
        let now = Local::now();
        let filename = timestamped_filename("calorie_log", now);
        match write_text_report(Path::new(&filename), &report.render_session(now)) {
            Ok(()) => println!("Saved report as: {}", filename),
            Err(e) => println!("Error: {}", e),
        }
    } else {
        println!("Report not saved.");
    }
    println!();
    println!("Thank you for using Daily Calorie Tracker!");
}
