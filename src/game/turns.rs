//! Turn sequencer — whose turn it is to place pins.
//!
//! Every player takes exactly one turn, in roster order, placing a pin for
//! every player including themselves. "Finished" is never stored: it is read
//! off the turn index against the current roster length, so it stays right
//! if the roster changes underneath.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Setup: players are being added, no game running.
    Idle,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSequencer {
    started: bool,
    index: usize,
}

impl TurnSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → InProgress. Turn index back to the first player.
    pub fn start(&mut self) {
        self.started = true;
        self.index = 0;
    }

    /// Back to Idle from any phase.
    pub fn reset(&mut self) {
        self.started = false;
        self.index = 0;
    }

    /// Move on to the next player. Never goes backwards.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Everyone has had a turn. Needs a non-empty roster.
    pub fn is_finished(&self, roster_len: usize) -> bool {
        roster_len > 0 && self.index >= roster_len
    }

    pub fn phase(&self, roster_len: usize) -> Phase {
        if !self.is_started() {
            Phase::Idle
        } else if self.is_finished(roster_len) {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Roster index of the player whose turn it is, if a turn is open.
    pub fn current_index(&self, roster_len: usize) -> Option<usize> {
        (self.is_started() && self.index < roster_len).then_some(self.index)
    }
}
