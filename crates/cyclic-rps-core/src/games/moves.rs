//! Validated, ordered list of move names.

use crate::error::MoveSetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How move names are compared when checking for duplicates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePolicy {
    /// `Rock` and `rock` are different moves.
    #[default]
    Sensitive,
    /// `Rock` and `rock` collide.
    Insensitive,
}

impl CasePolicy {
    fn normalize(&self, name: &str) -> String {
        match self {
            CasePolicy::Sensitive => name.to_string(),
            CasePolicy::Insensitive => name.to_lowercase(),
        }
    }
}

/// Ordered set of distinct move names with an odd count of at least 3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
    policy: CasePolicy,
}

impl MoveSet {
    /// Minimum number of moves in a game
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set.
    ///
    /// Names are kept exactly as given; the case policy only affects the
    /// duplicate check.
    pub fn new<I, S>(names: I, policy: CasePolicy) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();

        if count < Self::MIN_MOVES {
            return Err(MoveSetError::TooFew { count });
        }
        if count % 2 == 0 {
            return Err(MoveSetError::EvenCount { count });
        }

        let mut seen: HashMap<String, usize> = HashMap::with_capacity(count);
        for (i, name) in names.iter().enumerate() {
            let position = i + 1;
            if name.trim().is_empty() {
                return Err(MoveSetError::EmptyName { position });
            }
            if let Some(first) = seen.insert(policy.normalize(name), position) {
                return Err(MoveSetError::Duplicate {
                    name: name.clone(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { names, policy })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; a valid move set has at least 3 entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at a 1-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    pub fn policy(&self) -> CasePolicy {
        self.policy
    }
}
