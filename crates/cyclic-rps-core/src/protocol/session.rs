//! A single round between the computer and a user.
//!
//! `start` fixes the computer's move and commits to its name, so the digest
//! can be shown before the user chooses. `finish` consumes the session,
//! settles the round and reveals the key. There is no way back from
//! `finish` and no second round on the same key.

use super::messages::{CommitMessage, PlayedMove, RoundRecord};
use super::GameId;
use crate::crypto::{CommitDigest, Commitment, CommitmentEngine, KeyedHasher};
use crate::error::GameError;
use crate::games::GameRules;
use rand::{CryptoRng, Rng, RngCore};
use std::fmt;
use tracing::{debug, info};

/// A move index already checked against the session's rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserChoice(usize);

impl UserChoice {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Committed, not yet played
pub struct GameSession {
    id: GameId,
    rules: GameRules,
    computer_move: usize,
    commitment: Commitment,
}

impl GameSession {
    /// Start a round with the computer's move drawn from the thread RNG
    pub fn start<R, H>(rules: GameRules, engine: &mut CommitmentEngine<R, H>) -> Result<Self, GameError>
    where
        R: RngCore + CryptoRng,
        H: KeyedHasher,
    {
        Self::start_with_rng(rules, engine, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R, H, G>(
        rules: GameRules,
        engine: &mut CommitmentEngine<R, H>,
        rng: &mut G,
    ) -> Result<Self, GameError>
    where
        R: RngCore + CryptoRng,
        H: KeyedHasher,
        G: Rng,
    {
        let id = GameId::new();
        let computer_move = rng.gen_range(1..=rules.size());
        let commitment = engine.commit(rules.name_of(computer_move)?.as_bytes())?;

        info!(game_id = %id, moves = rules.size(), digest = %commitment.digest(), "game started");

        Ok(Self {
            id,
            rules,
            computer_move,
            commitment,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Digest to publish before the user moves
    pub fn digest(&self) -> &CommitDigest {
        self.commitment.digest()
    }

    pub fn commit_message(&self) -> CommitMessage {
        CommitMessage {
            game_id: self.id,
            moves: self.rules.all_moves().to_vec(),
            digest: *self.commitment.digest(),
        }
    }

    /// Validate a user's move without ending the round.
    pub fn choose(&self, index: usize) -> Result<UserChoice, GameError> {
        self.rules.name_of(index)?;
        debug!(game_id = %self.id, index, "user move accepted");
        Ok(UserChoice(index))
    }

    /// Settle the round and disclose the key.
    pub fn finish(self, choice: UserChoice) -> Result<RoundRecord, GameError> {
        let outcome = self.rules.compare(choice.0, self.computer_move)?;
        let user = self.played(choice.0)?;
        let computer = self.played(self.computer_move)?;
        let reveal = self.commitment.reveal();

        info!(
            game_id = %self.id,
            user = %user.name,
            computer = %computer.name,
            %outcome,
            "round finished, key revealed"
        );

        Ok(RoundRecord {
            game_id: self.id,
            moves: self.rules.all_moves().to_vec(),
            user,
            computer,
            outcome,
            reveal,
        })
    }

    fn played(&self, index: usize) -> Result<PlayedMove, GameError> {
        Ok(PlayedMove {
            index,
            name: self.rules.name_of(index)?.to_string(),
        })
    }
}

// The computer's move stays out of debug output until the round is settled.
impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("moves", &self.rules.size())
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{CasePolicy, MoveSet};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn classic() -> GameRules {
        GameRules::new(MoveSet::new(["rock", "paper", "scissors"], CasePolicy::Sensitive).unwrap())
    }

    #[test]
    fn test_round_produces_verifiable_record() {
        let mut engine = CommitmentEngine::new();
        let session = GameSession::start(classic(), &mut engine).unwrap();
        let digest = *session.digest();
        let choice = session.choose(1).unwrap();
        let record = session.finish(choice).unwrap();

        assert_eq!(record.reveal.digest(), &digest);
        assert!(record.verify());
        assert_eq!(record.user.name, "rock");
        assert_eq!(
            record.outcome,
            classic().compare(1, record.computer.index).unwrap()
        );
    }

    #[test]
    fn test_choose_rejects_out_of_range() {
        let mut engine = CommitmentEngine::new();
        let session = GameSession::start(classic(), &mut engine).unwrap();

        assert!(matches!(
            session.choose(0),
            Err(GameError::InvalidMoveIndex { index: 0, size: 3 })
        ));
        assert!(session.choose(4).is_err());
        // The session is still usable after a bad pick.
        assert!(session.choose(3).is_ok());
    }

    #[test]
    fn test_seeded_rngs_fix_computer_move_and_digest() {
        let play = || {
            let mut engine = CommitmentEngine::with_rng(ChaCha20Rng::seed_from_u64(9));
            let mut picker = ChaCha20Rng::seed_from_u64(3);
            let session = GameSession::start_with_rng(classic(), &mut engine, &mut picker).unwrap();
            let digest = *session.digest();
            let choice = session.choose(2).unwrap();
            (digest, session.finish(choice).unwrap())
        };

        let (d1, r1) = play();
        let (d2, r2) = play();
        assert_eq!(d1, d2);
        assert_eq!(r1.computer, r2.computer);
        assert_eq!(r1.reveal, r2.reveal);
    }

    #[test]
    fn test_commit_message_carries_digest() {
        let mut engine = CommitmentEngine::new();
        let session = GameSession::start(classic(), &mut engine).unwrap();
        let msg = session.commit_message();

        assert_eq!(msg.game_id, session.id());
        assert_eq!(&msg.digest, session.digest());
        assert_eq!(msg.moves, vec!["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_debug_hides_computer_move() {
        let names = ["rock", "paper", "scissors"];
        let mut engine = CommitmentEngine::new();
        let session = GameSession::start(classic(), &mut engine).unwrap();
        let shown = format!("{:?}", session);

        assert!(shown.contains(&session.id().to_string()));
        assert!(!shown.contains("computer_move"));
        for name in names {
            assert!(!shown.contains(name));
        }
    }

    #[test]
    fn test_each_session_uses_a_new_key() {
        let mut engine = CommitmentEngine::new();
        let a = GameSession::start(classic(), &mut engine).unwrap();
        let b = GameSession::start(classic(), &mut engine).unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a.digest(), b.digest());
    }
}
