//! `/api/game/*` routes — game lifecycle: start, turns, axes, reset.
//!
//! The pointer layer owns dragging. It posts one turn's worth of pins as a
//! JSON object keyed by subject name, with coordinates already normalized to
//! the plane (`{"Ana": {"x": 0.25, "y": 0.6}, ...}`).

use crate::game::axes::AxisPair;
use crate::game::error::GameError;
use crate::game::palette::{contrast_text_color, player_color};
use crate::game::placements::TurnPlacements;
use crate::game::state::{self, GameSession};
use crate::routes::util::{error_html, escape_html};

// ── POST /api/game/start ───────────────────────────────────────────

/// Start the game with the current roster and render the first turn.
pub fn handle_start_post(_body: &str) -> String {
    let result = state::with_session_mut(|s| {
        if !s.is_game_ready() {
            return Err(GameError::NotEnoughPlayers {
                required: s.config().min_players,
                actual: s.players().len(),
            });
        }
        s.start_game()
    });
    match result {
        Ok(()) => state::with_session(render_turn_panel),
        Err(e) => error_html(&e.to_string()),
    }
}

// ── GET /api/game/turn ─────────────────────────────────────────────

pub fn handle_turn_get(_query: &str) -> String {
    state::with_session(render_turn_panel)
}

// ── POST /api/game/turn ────────────────────────────────────────────

/// Handle POST /api/game/turn
/// Body: JSON object of subject name → `{x, y}` for the current player.
///
/// Returns the next turn panel, or the "all done" panel after the last turn.
pub fn handle_turn_post(body: &str) -> String {
    let result = parse_turn(body).and_then(|placements| {
        state::with_session_mut(|s| {
            warn_on_missing_subjects(s, &placements);
            s.record_turn_placements(placements)
        })
    });
    match result {
        Ok(_) => state::with_session(render_turn_panel),
        Err(e) => {
            log::warn!("turn rejected: {}", e);
            error_html(&e.to_string())
        }
    }
}

fn parse_turn(body: &str) -> Result<TurnPlacements, GameError> {
    Ok(serde_json::from_str(body.trim())?)
}

/// Full coverage is the pointer layer's job; note gaps without refusing the turn.
fn warn_on_missing_subjects(session: &GameSession, placements: &TurnPlacements) {
    let missing: Vec<&str> = session
        .players()
        .iter()
        .filter(|p| !placements.contains_key(*p))
        .collect();
    if !missing.is_empty() {
        log::warn!(
            "turn for {:?} has no pin for {:?}",
            session.current_player(),
            missing
        );
    }
}

/// Turn indicator, instructions and the unplaced pin tray for the current player.
pub fn render_turn_panel(session: &GameSession) -> String {
    let Some(player) = session.current_player() else {
        return render_finished_panel(session);
    };

    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div id="game-section" class="section">"#);
    html.push_str(&format!(
        r#"<div id="turn-indicator" class="text-xl font-bold mb-2" data-turn="{}">{}'s Turn</div>"#,
        session.current_turn(),
        escape_html(player)
    ));
    html.push_str(r#"<p class="instructions text-sm mb-3">Drag each sticky note from below and place it where you think that person belongs on the graph.</p>"#);

    html.push_str(r#"<div id="pins-container" class="pins-container flex flex-wrap gap-2">"#);
    for (i, name) in session.players().iter().enumerate() {
        let color = player_color(i);
        html.push_str(&format!(
            r#"<div class="pin px-2 py-1 rounded shadow cursor-grab" data-player="{name}" style="background-color: {color}; color: {text}">{name}</div>"#,
            name = escape_html(name),
            color = color,
            text = contrast_text_color(color)
        ));
    }
    html.push_str("</div>");

    if let Some(axes) = session.axes() {
        html.push_str(&render_axis_labels(axes));
    }
    html.push_str("</div>");
    html
}

fn render_finished_panel(session: &GameSession) -> String {
    if !session.is_game_finished() {
        return r#"<div id="game-section" class="section"><p class="text-sm">No game in progress.</p></div>"#
            .to_string();
    }
    let mut html = String::with_capacity(256);
    html.push_str(r#"<div id="game-section" class="section">"#);
    html.push_str(r#"<p class="text-lg font-bold mb-2">All pins placed!</p>"#);
    html.push_str(r##"<button class="bg-rose-500 hover:bg-rose-600 text-white font-bold py-2 px-4 rounded" hx-get="/api/game/scores" hx-target="#game-root">See Final Scores</button>"##);
    html.push_str("</div>");
    html
}

// ── GET/POST /api/game/axes ────────────────────────────────────────

pub fn handle_axes_get(_query: &str) -> String {
    state::with_session(|s| match s.axes() {
        Some(axes) => render_axis_labels(axes),
        None => error_html("No axes available"),
    })
}

pub fn handle_axes_post(_body: &str) -> String {
    match state::with_session_mut(|s| s.randomize_axes()) {
        Ok(axes) => render_axis_labels(&axes),
        Err(e) => error_html(&e.to_string()),
    }
}

/// The four pole labels around the plane.
pub fn render_axis_labels(axes: &AxisPair) -> String {
    format!(
        r#"<div id="axis-labels"><div class="axis-label x-axis-start">{}</div><div class="axis-label x-axis-end">{}</div><div class="axis-label y-axis-start">{}</div><div class="axis-label y-axis-end">{}</div></div>"#,
        escape_html(axes.x.start),
        escape_html(axes.x.end),
        escape_html(axes.y.start),
        escape_html(axes.y.end)
    )
}

// ── POST /api/game/reset ───────────────────────────────────────────

/// Play again: back to an empty setup screen.
pub fn handle_reset_post(_body: &str) -> String {
    state::with_session_mut(|s| s.reset_game());
    state::with_session(crate::routes::players::render_player_list)
}

// ── GET /api/game/state ────────────────────────────────────────────

/// JSON snapshot of the session, for the chart and debugging.
pub fn handle_state_get(_query: &str) -> String {
    state::export_state_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::turns::Phase;

    fn reset_state() {
        state::replace_session(GameSession::new());
    }

    fn add(names: &[&str]) {
        state::with_session_mut(|s| {
            for n in names {
                s.add_player(n).unwrap();
            }
        });
    }

    #[test]
    fn start_needs_two_players() {
        reset_state();
        add(&["Ana"]);
        let html = handle_start_post("");
        assert!(html.contains("at least 2 players"));
        assert_eq!(state::with_session(|s| s.phase()), Phase::Idle);
        reset_state();
    }

    #[test]
    fn start_renders_first_turn() {
        reset_state();
        add(&["Ana", "Ben"]);
        let html = handle_start_post("");
        assert!(html.contains("Ana's Turn"));
        assert!(html.contains(r#"data-player="Ben""#));
        assert!(html.contains("x-axis-start"));
        reset_state();
    }

    #[test]
    fn turns_advance_to_finished() {
        reset_state();
        add(&["Ana", "Ben"]);
        handle_start_post("");

        let html = handle_turn_post(r#"{"Ana": {"x": 0.1, "y": 0.2}, "Ben": {"x": 0.8, "y": 0.9}}"#);
        assert!(html.contains("Ben's Turn"));

        let html = handle_turn_post(r#"{"Ana": {"x": 0.1, "y": 0.2}, "Ben": {"x": 0.8, "y": 0.9}}"#);
        assert!(html.contains("All pins placed!"));
        assert!(state::with_session(|s| s.is_game_finished()));

        let html = handle_turn_post(r#"{"Ana": {"x": 0.5, "y": 0.5}}"#);
        assert!(html.contains("no player is taking a turn"));
        reset_state();
    }

    #[test]
    fn malformed_turn_body_is_rejected() {
        reset_state();
        add(&["Ana", "Ben"]);
        handle_start_post("");
        let html = handle_turn_post("not json");
        assert!(html.contains("invalid placements"));
        assert_eq!(state::with_session(|s| s.current_turn()), 0);
        reset_state();
    }

    #[test]
    fn turn_get_without_game() {
        reset_state();
        let html = handle_turn_get("");
        assert!(html.contains("No game in progress"));
        reset_state();
    }

    #[test]
    fn axes_post_redraws() {
        reset_state();
        let html = handle_axes_post("");
        assert!(html.contains("y-axis-end"));
        let labels = state::with_session(|s| s.axes().copied()).unwrap();
        assert!(html.contains(&escape_html(labels.x.start)));
        reset_state();
    }

    #[test]
    fn reset_clears_roster() {
        reset_state();
        add(&["Ana", "Ben"]);
        handle_start_post("");
        let html = handle_reset_post("");
        assert!(html.contains("players-list"));
        assert!(state::with_session(|s| s.players().is_empty()));
        assert_eq!(state::with_session(|s| s.phase()), Phase::Idle);
        reset_state();
    }

    #[test]
    fn state_get_is_json() {
        reset_state();
        add(&["Ana", "Ben"]);
        let json = handle_state_get("");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "idle");
        assert_eq!(value["players"][1], "Ben");
        reset_state();
    }
}
