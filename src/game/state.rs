//! Game session — the one owner of roster, pins, turn state and axes.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the WASM module alive, so the session persists
//! across `handle_request` calls for the whole browser session and is gone
//! when the tab closes.

use std::cell::RefCell;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Serializer};

use crate::game::axes::{self, AxisPair};
use crate::game::config::GameConfig;
use crate::game::error::GameError;
use crate::game::placements::{PlacementStore, TurnPlacements};
use crate::game::roster::Roster;
use crate::game::scoring::{self, ScoreEntry, ScoreTable};
use crate::game::turns::{Phase, TurnSequencer};

/// Whose pins the results screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectedFilter {
    #[default]
    All,
    Player(String),
}

impl SelectedFilter {
    /// `"all"` (or nothing) selects everyone; anything else names a player.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => SelectedFilter::All,
            name => SelectedFilter::Player(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SelectedFilter::All => "all",
            SelectedFilter::Player(name) => name,
        }
    }

    pub fn player(&self) -> Option<&str> {
        match self {
            SelectedFilter::All => None,
            SelectedFilter::Player(name) => Some(name),
        }
    }
}

impl fmt::Display for SelectedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SelectedFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Read-only view of a session for the `/api/game/state` snapshot.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub players: &'a Roster,
    pub current_turn: usize,
    pub current_player: Option<&'a str>,
    pub phase: Phase,
    pub is_game_finished: bool,
    pub axes: Option<&'a AxisPair>,
    pub placements: &'a PlacementStore,
    pub selected_filter: &'a SelectedFilter,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    roster: Roster,
    placements: PlacementStore,
    turns: TurnSequencer,
    axes: Option<AxisPair>,
    selected_filter: SelectedFilter,
    rng: StdRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session over the compiled-in catalog, seeded from the platform.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default(), StdRng::from_entropy())
    }

    /// Session with an explicit config and random source (seed it in tests).
    pub fn with_config(config: GameConfig, mut rng: StdRng) -> Self {
        let axes = axes::randomize_axes(config.axis_catalog, &mut rng)
            .inspect_err(|e| log::warn!("no initial axes: {}", e))
            .ok();
        Self {
            config,
            roster: Roster::new(),
            placements: PlacementStore::new(),
            turns: TurnSequencer::new(),
            axes,
            selected_filter: SelectedFilter::All,
            rng,
        }
    }

    // ── Roster ─────────────────────────────────────────────────────

    /// Add a player. Returns the trimmed name that was stored.
    pub fn add_player(&mut self, name: &str) -> Result<String, GameError> {
        let name = self.roster.add(name).inspect_err(|e| {
            log::warn!("add_player rejected {:?}: {}", name, e);
        })?;
        self.placements.ensure_placer(&name);
        log::debug!("player added: {} ({} total)", name, self.roster.len());
        Ok(name)
    }

    /// Remove the player at `index`. Out-of-range indices are ignored.
    pub fn remove_player(&mut self, index: usize) -> Option<String> {
        match self.roster.remove(index) {
            Ok(name) => {
                self.placements.remove_player(&name);
                if self.selected_filter.player() == Some(name.as_str()) {
                    self.selected_filter = SelectedFilter::All;
                }
                log::debug!("player removed: {}", name);
                Some(name)
            }
            Err(e) => {
                log::debug!("remove_player ignored: {}", e);
                None
            }
        }
    }

    /// Empty the roster. A running game ends with it, back to Idle.
    pub fn clear_players(&mut self) {
        self.roster.clear();
        self.placements.clear();
        self.turns.reset();
        self.selected_filter = SelectedFilter::All;
        log::debug!("players cleared");
    }

    // ── Game lifecycle ─────────────────────────────────────────────

    /// Enough players to start.
    pub fn is_game_ready(&self) -> bool {
        self.roster.len() >= self.config.min_players
    }

    /// Start (or restart) a game with the current roster.
    ///
    /// The player minimum is the caller's to enforce; see [`is_game_ready`](Self::is_game_ready).
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let axes = axes::randomize_axes(self.config.axis_catalog, &mut self.rng)?;
        if !self.is_game_ready() {
            log::warn!(
                "starting with {} players (minimum {})",
                self.roster.len(),
                self.config.min_players
            );
        }
        self.axes = Some(axes);
        self.placements.reset_for(self.roster.iter());
        self.turns.start();
        log::debug!("game started with {} players", self.roster.len());
        Ok(())
    }

    /// Store the current player's pins and pass the turn on.
    ///
    /// Returns the name of the player whose turn was recorded. Fails with
    /// [`GameError::NoCurrentPlayer`] before any mutation when no turn is open.
    pub fn record_turn_placements(
        &mut self,
        placements: TurnPlacements,
    ) -> Result<String, GameError> {
        let placer = self
            .current_player()
            .ok_or(GameError::NoCurrentPlayer)?
            .to_string();
        log::debug!(
            "turn {} recorded for {} ({} pins)",
            self.turns.index(),
            placer,
            placements.len()
        );
        self.placements.record_turn(&placer, placements);
        self.turns.advance();
        if self.is_game_finished() {
            log::debug!("all {} turns complete", self.roster.len());
        }
        Ok(placer)
    }

    /// Back to setup: no players, no pins, filter on everyone, fresh axes.
    pub fn reset_game(&mut self) {
        self.roster.clear();
        self.placements.clear();
        self.turns.reset();
        self.selected_filter = SelectedFilter::All;
        self.axes = axes::randomize_axes(self.config.axis_catalog, &mut self.rng)
            .inspect_err(|e| log::warn!("reset without axes: {}", e))
            .ok();
        log::debug!("game reset");
    }

    /// Draw new axes without touching anything else.
    pub fn randomize_axes(&mut self) -> Result<AxisPair, GameError> {
        let axes = axes::randomize_axes(self.config.axis_catalog, &mut self.rng)?;
        self.axes = Some(axes);
        Ok(axes)
    }

    // ── Scoring ────────────────────────────────────────────────────

    pub fn calculate_scores(&self) -> ScoreTable {
        scoring::calculate_scores(&self.roster, &self.placements)
    }

    pub fn sorted_scores(&self) -> Vec<ScoreEntry> {
        scoring::sorted_scores(&self.roster, &self.placements)
    }

    pub fn player_scoreboard(&self, subject: &str) -> Vec<ScoreEntry> {
        scoring::player_scoreboard(subject, &self.roster, &self.placements)
    }

    pub fn winner(&self) -> Option<ScoreEntry> {
        scoring::winner(&self.roster, &self.placements)
    }

    // ── Observers ──────────────────────────────────────────────────

    pub fn players(&self) -> &Roster {
        &self.roster
    }

    pub fn placements(&self) -> &PlacementStore {
        &self.placements
    }

    pub fn current_turn(&self) -> usize {
        self.turns.index()
    }

    pub fn current_player(&self) -> Option<&str> {
        self.turns
            .current_index(self.roster.len())
            .and_then(|i| self.roster.get(i))
    }

    pub fn phase(&self) -> Phase {
        self.turns.phase(self.roster.len())
    }

    pub fn is_game_finished(&self) -> bool {
        self.turns.is_finished(self.roster.len())
    }

    pub fn axes(&self) -> Option<&AxisPair> {
        self.axes.as_ref()
    }

    pub fn selected_filter(&self) -> &SelectedFilter {
        &self.selected_filter
    }

    pub fn set_selected_filter(&mut self, filter: SelectedFilter) {
        self.selected_filter = filter;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            players: &self.roster,
            current_turn: self.turns.index(),
            current_player: self.current_player(),
            phase: self.phase(),
            is_game_finished: self.is_game_finished(),
            axes: self.axes.as_ref(),
            placements: &self.placements,
            selected_filter: &self.selected_filter,
        }
    }
}

thread_local! {
    static SESSION: RefCell<GameSession> = RefCell::new(GameSession::new());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&GameSession) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut GameSession) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the entire session (tests use this to inject a seeded one).
pub fn replace_session(new_session: GameSession) {
    SESSION.with(|s| {
        *s.borrow_mut() = new_session;
    });
}

/// Export the session as JSON.
pub fn export_state_json() -> String {
    with_session(|s| serde_json::to_string(&s.snapshot()).unwrap_or_else(|_| "{}".to_string()))
}
