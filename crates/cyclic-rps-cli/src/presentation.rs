//! Text rendering for the menu, help table and round results.
use cyclic_rps_core::{GameError, GameRules, Outcome};

const HEADER: &str = "Moves / Results";

/// Numbered move list followed by the exit and help entries.
pub fn render_menu(rules: &GameRules) -> String {
    let mut menu = String::from("Available moves:\n");
    for (i, name) in rules.all_moves().iter().enumerate() {
        menu.push_str(&format!("{} - {}\n", i + 1, name));
    }
    menu.push_str("0 - exit\n");
    menu.push_str("? - help\n");
    menu
}

/// Results matrix from the point of view of the move in each row.
pub fn render_help_table(rules: &GameRules, column_width: usize) -> Result<String, GameError> {
    let table = rules.outcome_table()?;
    let longest = rules.all_moves().iter().map(|m| m.chars().count()).max().unwrap_or(0);
    let first = (HEADER.len() + 3).max(longest + 2);
    let cell = column_width.max(longest + 2);

    let mut out = format!("{:<first$}", HEADER);
    for name in rules.all_moves() {
        out.push_str(&format!("{:<cell$}", name));
    }
    out.push('\n');

    for (name, row) in rules.all_moves().iter().zip(&table) {
        out.push_str(&format!("{:<first$}", name));
        for outcome in row {
            out.push_str(&format!("{:<cell$}", outcome.as_str()));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Verdict line for the user's side of a round.
pub fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "It's a draw!",
    }
}
