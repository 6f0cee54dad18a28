//! `/api/players` routes — roster setup before the game starts.

use crate::game::palette::{contrast_text_color, player_color};
use crate::game::state::{self, GameSession};
use crate::routes::util::{error_html, escape_html, get_param, parse_form_body};

// ── GET /api/players ───────────────────────────────────────────────

pub fn handle_get(_query: &str) -> String {
    state::with_session(render_player_list)
}

// ── POST /api/players ──────────────────────────────────────────────

/// Handle POST /api/players
/// Body params:
///   - action=add&name={name}   → add a player
///   - action=remove&index={n}  → remove the player at position n (0-based)
///   - action=clear             → remove everyone
///
/// Returns the refreshed player list. A rejected name is reported above the list.
pub fn handle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let action = get_param(&params, "action").unwrap_or("add");

    let notice = match action {
        "add" => {
            let name = get_param(&params, "name").unwrap_or("");
            state::with_session_mut(|s| s.add_player(name))
                .err()
                .map(|e| error_html(&e.to_string()))
        }
        "remove" => {
            match get_param(&params, "index").and_then(|s| s.parse::<usize>().ok()) {
                Some(idx) => {
                    state::with_session_mut(|s| s.remove_player(idx));
                }
                None => log::debug!("remove without a usable index"),
            }
            None
        }
        "clear" => {
            state::with_session_mut(|s| s.clear_players());
            None
        }
        other => Some(error_html(&format!("Unknown action: {}", other))),
    };

    let list = state::with_session(render_player_list);
    match notice {
        Some(n) => format!(r#"<div class="mb-2">{}</div>{}"#, n, list),
        None => list,
    }
}

/// Numbered roster with colour swatches, remove buttons and the start button.
pub fn render_player_list(session: &GameSession) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div id="players-list" class="flex flex-col gap-1">"#);

    for (i, name) in session.players().iter().enumerate() {
        let color = player_color(i);
        html.push_str(&format!(
            r#"<div class="player-item flex items-center gap-2 rounded px-2 py-1" style="background-color: {}; color: {}">"#,
            color,
            contrast_text_color(color)
        ));
        html.push_str(&format!(
            r#"<span class="font-bold">{}.</span><span class="flex-1">{}</span>"#,
            i + 1,
            escape_html(name)
        ));
        html.push_str(&format!(
            r##"<button class="text-sm font-bold px-2" aria-label="Remove player" hx-post="/api/players" hx-vals='{{"action": "remove", "index": "{}"}}' hx-target="#players-list" hx-swap="outerHTML">&#x2715;</button>"##,
            i
        ));
        html.push_str("</div>");
    }

    let disabled = if session.is_game_ready() { "" } else { " disabled" };
    html.push_str(r#"<div class="button-group flex gap-2 mt-3">"#);
    html.push_str(&format!(
        r##"<button class="bg-rose-500 hover:bg-rose-600 text-white font-bold py-2 px-4 rounded disabled:opacity-50" hx-post="/api/game/start" hx-target="#game-root"{}>Start Game</button>"##,
        disabled
    ));
    html.push_str(
        r##"<button class="secondary bg-slate-200 hover:bg-slate-300 py-2 px-4 rounded" hx-post="/api/players" hx-vals='{"action": "clear"}' hx-target="#players-list" hx-swap="outerHTML">Clear All</button>"##,
    );
    html.push_str("</div></div>");
    html
}
