//! Results routes — final ranking, "who knows X best", and the shared pin map.

use crate::game::geometry::Placement;
use crate::game::palette::{contrast_text_color, player_color};
use crate::game::scoring::ScoreEntry;
use crate::game::state::{self, GameSession, SelectedFilter};
use crate::routes::util::{escape_html, get_param, parse_form_body, parse_query};

// ── GET /api/game/scores ───────────────────────────────────────────

pub fn handle_scores_get(_query: &str) -> String {
    state::with_session(render_final_scores)
}

fn render_final_scores(session: &GameSession) -> String {
    let sorted = session.sorted_scores();
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div id="final-scores-section" class="section">"#);
    html.push_str(r#"<h2 class="text-2xl font-bold mb-3">Final Scores</h2>"#);
    html.push_str(&render_score_table(&sorted, "Score"));

    if let Some(top) = sorted.first() {
        html.push_str(&format!(
            r#"<div class="winner-announcement mt-3"><strong>{}</strong> knows their friends best with {} points!</div>"#,
            escape_html(&top.player),
            top.score
        ));
    }

    html.push_str(r#"<h3 class="text-xl font-bold mt-4 mb-2">Everyone's Placements</h3>"#);
    html.push_str(r#"<div id="results-filter">"#);
    html.push_str(&render_filter_panel(session));
    html.push_str("</div>");
    html.push_str(
        r##"<div class="button-group flex justify-center mt-4"><button id="play-again" class="bg-rose-500 hover:bg-rose-600 text-white font-bold py-2 px-4 rounded" hx-post="/api/game/reset" hx-target="#game-root">Play Again</button></div>"##,
    );
    html.push_str("</div>");
    html
}

fn render_score_table(entries: &[ScoreEntry], points_heading: &str) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&format!(
        r#"<table class="w-full text-left"><thead><tr><th>Rank</th><th>Player</th><th>{}</th></tr></thead><tbody>"#,
        points_heading
    ));
    for (i, entry) in entries.iter().enumerate() {
        let row_class = if i == 0 { r#" class="winner font-bold""# } else { "" };
        html.push_str(&format!(
            r#"<tr{}><td>{}</td><td>{}</td><td>{} points</td></tr>"#,
            row_class,
            i + 1,
            escape_html(&entry.player),
            entry.score
        ));
    }
    html.push_str("</tbody></table>");
    html
}

// ── GET /api/game/scoreboard ───────────────────────────────────────

/// Handle GET /api/game/scoreboard?player={name}
pub fn handle_scoreboard_get(query: &str) -> String {
    let params = parse_query(query);
    let subject = get_param(&params, "player").unwrap_or("");
    state::with_session(|s| render_player_scoreboard(s, subject))
}

/// "Who knows X best?" table. Empty when X has not placed themselves.
fn render_player_scoreboard(session: &GameSession, subject: &str) -> String {
    let board = session.player_scoreboard(subject);
    if board.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="player-scoreboard mt-3"><h4 class="font-bold mb-1">Who knows {} best?</h4>{}</div>"#,
        escape_html(subject),
        render_score_table(&board, "Points")
    )
}

// ── POST /api/game/filter ──────────────────────────────────────────

/// Handle POST /api/game/filter
/// Body: `filter=all` or `filter={player name}`.
///
/// Returns the filter buttons, the pin map and (for one player) their scoreboard.
pub fn handle_filter_post(body: &str) -> String {
    let params = parse_form_body(body);
    let filter = SelectedFilter::parse(get_param(&params, "filter").unwrap_or("all"));
    state::with_session_mut(|s| s.set_selected_filter(filter));
    state::with_session(render_filter_panel)
}

fn render_filter_panel(session: &GameSession) -> String {
    let selected = session.selected_filter();
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="player-filter-container">"#);
    html.push_str(r#"<div class="player-filter-heading text-sm mb-1">View where people placed:</div>"#);
    html.push_str(r#"<div id="player-filter-buttons" class="player-filter-buttons flex flex-wrap gap-2">"#);

    let all_active = if *selected == SelectedFilter::All { " active ring-2" } else { "" };
    html.push_str(&format!(
        r##"<button class="player-filter-button all-button px-2 py-1 rounded bg-slate-200{}" hx-post="/api/game/filter" hx-vals='{{"filter": "all"}}' hx-target="#results-filter">All</button>"##,
        all_active
    ));
    for (i, name) in session.players().iter().enumerate() {
        let color = player_color(i);
        let active = if selected.player() == Some(name) { " active ring-2" } else { "" };
        let vals = serde_json::json!({ "filter": name }).to_string();
        html.push_str(&format!(
            r##"<button class="player-filter-button px-2 py-1 rounded{active}" style="background-color: {color}; color: {text}" hx-post="/api/game/filter" hx-vals='{vals}' hx-target="#results-filter">{name}</button>"##,
            active = active,
            color = color,
            text = contrast_text_color(color),
            vals = escape_html(&vals),
            name = escape_html(name)
        ));
    }
    html.push_str("</div></div>");

    html.push_str(r#"<div id="collective-placements-container">"#);
    html.push_str(&render_pin_map(session));
    if let Some(subject) = selected.player() {
        html.push_str(&render_player_scoreboard(session, subject));
    }
    html.push_str("</div>");
    html
}

// ── GET /api/game/pins ─────────────────────────────────────────────

pub fn handle_pins_get(_query: &str) -> String {
    state::with_session(render_pin_map)
}

/// Every pin from every turn, positioned as percentages of the plane.
///
/// Pins take the subject's colour. Filtering on a player dims everyone
/// else's pins and relabels the selected player's pins with who placed them.
fn render_pin_map(session: &GameSession) -> String {
    let roster = session.players();
    let store = session.placements();
    let selected = session.selected_filter().player();

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="collective-placements-chart relative">"#);
    html.push_str(r#"<h3 class="chart-title font-bold">Player Placement Map</h3>"#);
    if let Some(axes) = session.axes() {
        html.push_str(&crate::routes::game::render_axis_labels(axes));
    }

    for (subject_idx, subject) in roster.iter().enumerate() {
        let color = player_color(subject_idx);
        let text = contrast_text_color(color);
        let dimmed = selected.is_some_and(|s| s != subject);

        let mut pins: Vec<(usize, &str, Placement)> = store
            .guesses_about(subject)
            .filter_map(|(placer, place)| roster.position(placer).map(|i| (i, placer, place)))
            .collect();
        pins.sort_by_key(|(i, _, _)| *i);

        for (_, placer, place) in pins {
            let is_self = placer == subject;
            let label = if selected == Some(subject) { placer } else { subject };

            let mut style = format!(
                "background-color: {}; color: {}; left: {:.2}%; top: {:.2}%;",
                color,
                text,
                place.x * 100.0,
                place.y * 100.0
            );
            if dimmed {
                style.push_str(" opacity: 0.2;");
            } else if is_self {
                style.push_str(" box-shadow: 0 0 0 3px white, 2px 2px 5px rgba(0,0,0,0.3); z-index: 20;");
            } else {
                style.push_str(" transform: translate(-50%,-50%) scale(0.8);");
            }

            let self_class = if is_self { " self-pin" } else { "" };
            html.push_str(&format!(
                r#"<div class="pin absolute{}" data-placer="{}" data-subject="{}" style="{}">{}</div>"#,
                self_class,
                escape_html(placer),
                escape_html(subject),
                style,
                escape_html(label)
            ));
        }
    }

    html.push_str("</div>");
    html
}
