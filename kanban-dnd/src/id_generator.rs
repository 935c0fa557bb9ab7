//! Identifier generation.
//!
//! The only contract is uniqueness: a generator never hands out the same id
//! twice. Boards use one generator for columns and tasks, so ids are unique
//! across both kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of fresh entity identifiers
pub trait IdGenerator: fmt::Debug + Send {
    fn next_id(&mut self) -> String;
}

/// Monotonic counter rendered as decimal strings: `"1"`, `"2"`, ...
///
/// Deterministic, so tests can predict the ids a scenario produces. After
/// `u64::MAX` the counter wraps to 0; the store skips any id still in use.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id.to_string()
    }
}

/// ULID identifiers (26 characters, time ordered, 80 random bits)
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidIds;

impl UlidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UlidIds {
    fn next_id(&mut self) -> String {
        ulid::Ulid::new().to_string()
    }
}

/// Which generator a board uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Ulid,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(SequentialIds::new()),
            Self::Ulid => Box::new(UlidIds::new()),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Ulid => f.write_str("ulid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");

        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), "100");
    }

    #[test]
    fn test_sequential_ids_wrap_at_max() {
        let mut ids = SequentialIds::starting_at(u64::MAX);
        assert_eq!(ids.next_id(), u64::MAX.to_string());
        assert_eq!(ids.next_id(), "0");
        assert_eq!(ids.next_id(), "1");
    }

    #[test]
    fn test_ulid_ids_are_unique() {
        let mut ids = UlidIds::new();
        let issued: HashSet<String> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 500);
        assert!(issued.iter().all(|id| id.len() == 26));
    }

    #[test]
    fn test_strategy_selects_generator() {
        let mut generator = IdStrategy::Sequential.generator();
        assert_eq!(generator.next_id(), "1");

        let mut generator = IdStrategy::Ulid.generator();
        assert_eq!(generator.next_id().len(), 26);
    }

    #[test]
    fn test_strategy_deserializes_snake_case() {
        let strategy: IdStrategy = serde_json::from_str("\"ulid\"").unwrap();
        assert_eq!(strategy, IdStrategy::Ulid);
    }
}
