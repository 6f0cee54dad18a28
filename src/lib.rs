//! Plot Twist in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Service Worker
//! bridge to call. Uses `matchit` for URL routing — the same router
//! engine that powers Axum.
//!
//! Setup routes live under `/api/players`; the game itself (start, turns,
//! axes, results, reset) under `/api/game/*`. The session is held in WASM
//! memory for as long as the worker lives.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/api/players")
/// * `query`  — Query string (e.g., "?player=Ana")
/// * `body`   — Request body (form data, or JSON for turn placements). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM
/// (`/api/game/state` returns JSON).
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    // Register routes — the value is a &str tag we match on below
    router.insert("/api/players", "players").ok();

    router.insert("/api/game/start", "game_start").ok();
    router.insert("/api/game/turn", "game_turn").ok();
    router.insert("/api/game/axes", "game_axes").ok();
    router.insert("/api/game/reset", "game_reset").ok();
    router.insert("/api/game/state", "game_state").ok();

    router.insert("/api/game/scores", "game_scores").ok();
    router.insert("/api/game/scoreboard", "game_scoreboard").ok();
    router.insert("/api/game/filter", "game_filter").ok();
    router.insert("/api/game/pins", "game_pins").ok();

    log::debug!("{} {}", method, path);

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("players", "GET") => routes::players::handle_get(query),
            ("players", "POST") => routes::players::handle_post(body),

            ("game_start", "POST") => routes::game::handle_start_post(body),
            ("game_turn", "GET") => routes::game::handle_turn_get(query),
            ("game_turn", "POST") => routes::game::handle_turn_post(body),
            ("game_axes", "GET") => routes::game::handle_axes_get(query),
            ("game_axes", "POST") => routes::game::handle_axes_post(body),
            ("game_reset", "POST") => routes::game::handle_reset_post(body),
            ("game_state", "GET") => routes::game::handle_state_get(query),

            ("game_scores", "GET") => routes::scores::handle_scores_get(query),
            ("game_scoreboard", "GET") => routes::scores::handle_scoreboard_get(query),
            ("game_filter", "POST") => routes::scores::handle_filter_post(body),
            ("game_pins", "GET") => routes::scores::handle_pins_get(query),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-red-600">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-600">405 — method not allowed</span>"#.to_string()
}
