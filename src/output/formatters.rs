//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Print-ready guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.to_string()
        .chars()
        .zip(pattern.symbols())
        .map(|(ch, symbol)| {
            let letter: ColoredString = ch.to_string().bold();
            match symbol {
                Feedback::Correct => letter.black().on_green(),
                Feedback::Present => letter.black().on_yellow(),
                Feedback::Absent => letter.white().on_bright_black(),
            }
            .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar, full at `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits, width)
}

/// Progress bar for scoring `len` guesses
#[must_use]
pub fn scoring_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scoring guesses");
    pb
}
