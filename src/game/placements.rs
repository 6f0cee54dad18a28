//! Placement store — where each placer put each subject on the plane.
//!
//! Keyed `placer → subject → Placement`. `store[p][p]` is `p`'s self-placement;
//! everything else is a guess. The store keeps whatever it is given: range
//! checks belong to the pointer layer that produces the coordinates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::geometry::Placement;

/// One placer's full set of pins for a turn, keyed by subject.
pub type TurnPlacements = HashMap<String, Placement>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementStore {
    by_placer: HashMap<String, TurnPlacements>,
}

impl PlacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, placer: &str, subject: &str, placement: Placement) {
        self.by_placer
            .entry(placer.to_string())
            .or_default()
            .insert(subject.to_string(), placement);
    }

    pub fn get(&self, placer: &str, subject: &str) -> Option<Placement> {
        self.placements_by(placer)?.get(subject).copied()
    }

    /// `subject`'s own placement, if they have taken their turn.
    pub fn self_placement(&self, subject: &str) -> Option<Placement> {
        self.get(subject, subject)
    }

    /// Replace everything `placer` has placed with one turn's worth of pins.
    pub fn record_turn(&mut self, placer: &str, placements: TurnPlacements) {
        self.by_placer.insert(placer.to_string(), placements);
    }

    /// Ensure `placer` has a (possibly empty) map without touching existing pins.
    pub fn ensure_placer(&mut self, placer: &str) {
        self.by_placer.entry(placer.to_string()).or_default();
    }

    /// Drop all pins and start one empty map per player.
    pub fn reset_for<'a>(&mut self, players: impl IntoIterator<Item = &'a str>) {
        self.by_placer = players
            .into_iter()
            .map(|p| (p.to_string(), TurnPlacements::new()))
            .collect();
    }

    /// Remove every entry involving `name`, as placer or as subject.
    pub fn remove_player(&mut self, name: &str) {
        self.by_placer.remove(name);
        for placements in self.by_placer.values_mut() {
            placements.remove(name);
        }
    }

    pub fn clear(&mut self) {
        self.by_placer.clear();
    }

    pub fn placements_by(&self, placer: &str) -> Option<&TurnPlacements> {
        self.by_placer.get(placer)
    }

    /// Every pin placed on `subject` as `(placer, placement)`, the subject's own
    /// pin included. Order is unspecified.
    pub fn guesses_about<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = (&'a str, Placement)> + 'a {
        self.by_placer
            .iter()
            .filter_map(move |(placer, pins)| pins.get(subject).map(|p| (placer.as_str(), *p)))
    }

    pub fn has_placer(&self, placer: &str) -> bool {
        self.by_placer.contains_key(placer)
    }

    /// Total number of pins across all placers.
    pub fn pin_count(&self) -> usize {
        self.by_placer.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pin_count() == 0
    }
}
