//! # Interactive Prompts
//!
//! Line-based input helpers. Malformed input is handled locally by
//! printing a hint and asking again; it never propagates. Each `read_*`
//! function returns `None` only when stdin is closed, so callers can wind
//! down cleanly instead of spinning on EOF.
//!
//! The parsing rules live in pure `parse_*` functions so they can be
//! unit-tested without a terminal.

use std::io::{self, BufRead, Write};

use tally_core::errors::{TallyError, TallyResult};

/// Parse a non-negative number (e.g. `350` or `350.5`).
pub fn parse_non_negative(field: &str, raw: &str) -> TallyResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TallyError::invalid_input(field, raw.trim(), "enter a valid number"))?;
    if value < 0.0 {
        return Err(TallyError::invalid_input(
            field,
            raw.trim(),
            "enter a non-negative number",
        ));
    }
    Ok(value)
}

/// Parse a positive integer count.
pub fn parse_positive_count(field: &str, raw: &str) -> TallyResult<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| TallyError::invalid_input(field, raw.trim(), "enter a valid integer"))?;
    if count == 0 {
        return Err(TallyError::invalid_input(
            field,
            raw.trim(),
            "enter a positive integer",
        ));
    }
    Ok(count)
}

/// Print a prompt and read one trimmed line. `None` on EOF.
pub fn read_trimmed(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a non-empty line, re-prompting while the input is blank.
pub fn read_nonempty(prompt: &str) -> Option<String> {
    loop {
        let line = read_trimmed(prompt)?;
        if !line.is_empty() {
            return Some(line);
        }
        println!("Input cannot be empty.");
    }
}

/// Read a non-negative number, re-prompting on malformed input.
pub fn read_non_negative(prompt: &str, field: &str) -> Option<f64> {
    loop {
        let line = read_trimmed(prompt)?;
        match parse_non_negative(field, &line) {
            Ok(value) => return Some(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Read a positive integer count, re-prompting on malformed input.
pub fn read_positive_count(prompt: &str, field: &str) -> Option<usize> {
    loop {
        let line = read_trimmed(prompt)?;
        match parse_positive_count(field, &line) {
            Ok(count) => return Some(count),
            Err(e) => println!("{}", e),
        }
    }
}
