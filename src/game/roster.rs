//! Player roster — ordered, unique, trimmed display names.
//!
//! Insertion order is turn order and display order. A player's identity is
//! their name, so the roster refuses blanks and exact duplicates.

use serde::{Deserialize, Serialize};

use crate::game::error::{GameError, NameRejection};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append `name`. Returns the stored (trimmed) name.
    pub fn add(&mut self, name: &str) -> Result<String, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName(NameRejection::Blank));
        }
        if self.contains(name) {
            return Err(GameError::InvalidName(NameRejection::Duplicate));
        }
        self.players.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove the player at `index`, returning their name.
    pub fn remove(&mut self, index: usize) -> Result<String, GameError> {
        if index >= self.players.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.players.len(),
            });
        }
        Ok(self.players.remove(index))
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.players.get(index).map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.players
    }
}
