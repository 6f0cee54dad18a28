//! Game model — roster, turns, pins, axes and scoring for one browser session.
//!
//! State lives in WASM memory (thread_local) for the lifetime of the Web
//! Worker. Nothing is persisted; closing the tab ends the game.

pub mod axes;
pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod placements;
pub mod roster;
pub mod scoring;
pub mod state;
pub mod turns;
