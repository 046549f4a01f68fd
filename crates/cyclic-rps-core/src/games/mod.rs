//! Move sets and the dominance rules between them.

mod moves;
mod rules;

pub use moves::{CasePolicy, MoveSet};
pub use rules::GameRules;
