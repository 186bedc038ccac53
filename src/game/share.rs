//! Shareable result transcript

use super::score::Stats;
use super::state::Attempt;
use std::fmt::Write;

pub const SHARE_TITLE: &str = "Wordle Pro 🏆";

/// Build the text a player can paste elsewhere
///
/// One line of symbols per attempt (🟩 correct, 🟨 present, ⬛ absent),
/// preceded by the running score and streak and optionally followed by an
/// invitation link.
///
/// # Examples
/// ```
/// use wordle_pro::core::{Feedback, Word};
/// use wordle_pro::game::{Attempt, Stats, share_text};
///
/// let target = Word::new("panda").unwrap();
/// let guess = Word::new("plano").unwrap();
/// let attempts = [
///     Attempt::new(guess.clone(), Feedback::evaluate(&guess, &target)),
///     Attempt::new(target.clone(), Feedback::evaluate(&target, &target)),
/// ];
/// let text = share_text(&attempts, Stats { score: 500, streak: 1 }, None);
/// assert!(text.ends_with("🟩⬛🟨🟨⬛\n🟩🟩🟩🟩🟩\n"));
/// ```
#[must_use]
pub fn share_text(attempts: &[Attempt], stats: Stats, url: Option<&str>) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{SHARE_TITLE}");
    let _ = writeln!(text, "Score: {} | Streak: {}", stats.score, stats.streak);
    text.push('\n');

    for attempt in attempts {
        text.push_str(&attempt.feedback().to_share_symbols());
        text.push('\n');
    }

    if let Some(url) = url {
        let _ = write!(text, "\nCan you beat me? Play here: {url}");
    }

    text
}
