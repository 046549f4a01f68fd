//! Protocol types, messages, and the single-round session.

mod messages;
mod session;
mod types;

pub use messages::{CommitMessage, PlayedMove, RoundRecord};
pub use session::{GameSession, UserChoice};
pub use types::{GameId, Outcome};
