//! Display functions for game results

use super::formatters::{format_keyboard, format_row};
use crate::core::LetterStatus;
use crate::game::{GameSummary, GridRow, Stats};
use colored::Colorize;

/// Print the whole grid
pub fn print_grid(rows: &[GridRow]) {
    for row in rows {
        println!("   {}", format_row(row));
    }
}

/// Print the keyboard with aggregated letter colors
pub fn print_keyboard(status_of: impl Fn(char) -> Option<LetterStatus>) {
    println!();
    for line in format_keyboard(status_of) {
        println!("   {line}");
    }
    println!();
}

/// Print the end-of-game summary
pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if summary.won {
        let message = match summary.attempts {
            1 => "🎯 HOLE IN ONE!",
            2 => "🔥 MAGNIFICENT!",
            3 => "✨ SPLENDID!",
            4 => "👏 GREAT JOB!",
            5 => "🎉 NICE WORK!",
            _ => "😅 PHEW!",
        };
        println!("  {}", message.bright_green().bold());
    } else {
        println!("  {}", "💀 SO CLOSE!".bright_red().bold());
    }
    println!(
        "\n  The word was: {}",
        summary.target.text().bright_yellow().bold()
    );
    println!(
        "  Points:       {}",
        format!("+{}", summary.points).bright_cyan().bold()
    );
    println!("  Streak:       {}", summary.stats.streak);
    println!("  Total score:  {}", summary.stats.score);
    println!("{}\n", "═".repeat(50).bright_cyan());
}

/// Print persisted counters
pub fn print_stats(stats: Stats) {
    println!("\n{}", "Statistics".bright_cyan().bold());
    println!("   Score:  {}", stats.score.to_string().bright_yellow().bold());
    println!("   Streak: {}", stats.streak.to_string().bright_yellow().bold());
    println!();
}

/// Print a share transcript between rules
pub fn print_share(text: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{text}");
    println!("{}\n", "─".repeat(40).cyan());
}
