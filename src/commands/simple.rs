//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a guess or a command.

use crate::core::{Word, WordError};
use crate::game::{GameController, InputEffect, Key, MAX_ATTEMPTS};
use crate::output::formatters::{HOW_TO_PLAY, paint_tile};
use crate::output::{print_grid, print_keyboard, print_share, print_stats, print_summary};
use crate::store::StateStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: StateStore>(
    controller: &mut GameController<S>,
    reveal_delay: Duration,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║              Wordle Pro - Simple Mode            ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    if controller.should_show_tutorial() {
        print_help();
        controller.mark_tutorial_seen();
    }
    println!("Commands: 'quit' to exit, 'new' for a new word, ':share', ':stats', 'help'\n");
    print_stats(controller.stats());

    loop {
        if let Some(summary) = controller.summary() {
            print_summary(summary);
            let Some(answer) = get_user_input("Play again? (yes/no/share)")? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "share" | "s" => {
                    if let Some(text) = controller.share_text() {
                        print_share(&text);
                    }
                    continue;
                }
                "yes" | "y" | "new" | "n" => {
                    controller.new_game();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let turn = controller.state().attempts().len() + 1;
        let Some(input) = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))? else {
            return Ok(());
        };

        match parse_line(&input) {
            Line::Guess => submit_line(controller, &input, reveal_delay)?,
            Line::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Line::NewGame => {
                controller.new_game();
                println!("\n🔄 New game started!\n");
            }
            Line::Share => match controller.share_text() {
                Some(text) => print_share(&text),
                None => println!("Finish a game to share it.\n"),
            },
            Line::Stats => print_stats(controller.stats()),
            Line::Help => print_help(),
            Line::Invalid(e) => println!("{} {e}\n", "❌".red()),
        }
    }
}

/// What one line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Guess,
    Quit,
    NewGame,
    Share,
    Stats,
    Help,
    Invalid(WordError),
}

/// Classify a line; any five playable letters are a guess, even when
/// they spell a command
fn parse_line(input: &str) -> Line {
    let err = match Word::new(input) {
        Ok(_) => return Line::Guess,
        Err(e) => e,
    };
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Line::Quit,
        "new" | "n" => Line::NewGame,
        "help" | "?" => Line::Help,
        ":share" | "/share" => Line::Share,
        ":stats" | "/stats" => Line::Stats,
        _ => Line::Invalid(err),
    }
}

/// Feed a validated guess through the controller and animate its row
fn submit_line<S: StateStore>(
    controller: &mut GameController<S>,
    input: &str,
    reveal_delay: Duration,
) -> Result<()> {
    for c in input.chars() {
        if let Some(key) = Key::from_char(c) {
            controller.handle_key(key);
        }
    }

    match controller.handle_key(Key::Enter) {
        InputEffect::Submitted(_) => {}
        InputEffect::Rejected(e) => {
            println!("{} {e}\n", "❌".red());
            return Ok(());
        }
        other => {
            tracing::debug!(?other, "unexpected effect for submitted line");
            return Ok(());
        }
    }

    let mut stdout = io::stdout();
    write!(stdout, "   ")?;
    while let Some(step) = controller.advance_reveal() {
        write!(
            stdout,
            "{} ",
            paint_tile(&format!(" {} ", step.letter), Some(step.status))
        )?;
        stdout.flush()?;
        if !reveal_delay.is_zero() {
            thread::sleep(reveal_delay);
        }
    }
    writeln!(stdout, "\n")?;

    print_grid(&controller.grid());
    print_keyboard(|c| controller.key_status(c));
    Ok(())
}

fn print_help() {
    println!("{}", "How to play".bright_cyan().bold());
    for line in HOW_TO_PLAY {
        println!("  {line}");
    }
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
