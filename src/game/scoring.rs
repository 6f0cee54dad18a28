//! Scoring — turns the placement store into points and rankings.
//!
//! A guess earns the *guesser* points for landing close to the subject's own
//! pin. Partial data is expected (a removed player, an unfinished game): a
//! subject without a self-placement, or a guess that was never made, is
//! skipped rather than treated as an error.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::geometry::score_guess;
use crate::game::placements::PlacementStore;
use crate::game::roster::Roster;

/// Total points per player.
pub type ScoreTable = HashMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
}

impl ScoreEntry {
    fn new(player: &str, score: u32) -> Self {
        Self {
            player: player.to_string(),
            score,
        }
    }
}

/// Points for every roster member, 0 for anyone who earned nothing.
pub fn calculate_scores(roster: &Roster, store: &PlacementStore) -> ScoreTable {
    let mut scores: ScoreTable = roster.iter().map(|p| (p.to_string(), 0)).collect();

    for person in roster.iter() {
        let Some(self_placement) = store.self_placement(person) else {
            continue;
        };
        for player in roster.iter().filter(|p| *p != person) {
            let Some(guess) = store.get(player, person) else {
                continue;
            };
            if let Some(total) = scores.get_mut(player) {
                *total += score_guess(&self_placement, &guess);
            }
        }
    }

    scores
}

/// Highest score first; equal scores keep roster order.
pub fn sorted_scores(roster: &Roster, store: &PlacementStore) -> Vec<ScoreEntry> {
    let scores = calculate_scores(roster, store);
    let mut entries: Vec<ScoreEntry> = roster
        .iter()
        .map(|p| ScoreEntry::new(p, scores.get(p).copied().unwrap_or(0)))
        .collect();
    // sort_by_key is stable, which is the tie-break.
    entries.sort_by_key(|e| Reverse(e.score));
    entries
}

/// "Who knows `subject` best?" — each other player's points for guessing `subject`.
///
/// Empty when `subject` has no self-placement (including unknown names).
/// A player who never placed `subject` is listed with 0.
pub fn player_scoreboard(subject: &str, roster: &Roster, store: &PlacementStore) -> Vec<ScoreEntry> {
    let Some(self_placement) = store.self_placement(subject) else {
        return Vec::new();
    };

    let mut entries: Vec<ScoreEntry> = roster
        .iter()
        .filter(|p| *p != subject)
        .map(|player| {
            let score = store
                .get(player, subject)
                .map_or(0, |guess| score_guess(&self_placement, &guess));
            ScoreEntry::new(player, score)
        })
        .collect();
    entries.sort_by_key(|e| Reverse(e.score));
    entries
}

/// Top of the ranking, if anyone is playing.
pub fn winner(roster: &Roster, store: &PlacementStore) -> Option<ScoreEntry> {
    sorted_scores(roster, store).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::Placement;
    use proptest::prelude::*;

    fn roster(names: &[&str]) -> Roster {
        let mut r = Roster::new();
        for n in names {
            r.add(n).unwrap();
        }
        r
    }

    fn p(x: f64, y: f64) -> Placement {
        Placement::new(x, y)
    }

    #[test]
    fn perfect_guesses_score_100_each() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("A", "A", p(0.0, 0.0));
        s.set("A", "B", p(1.0, 1.0));
        s.set("B", "A", p(0.0, 0.0));
        s.set("B", "B", p(1.0, 1.0));

        let scores = calculate_scores(&r, &s);
        assert_eq!(scores["A"], 100);
        assert_eq!(scores["B"], 100);
    }

    #[test]
    fn max_distance_guess_scores_zero() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("A", "A", p(0.0, 0.0));
        s.set("B", "A", p(1.0, 1.0));

        let scores = calculate_scores(&r, &s);
        assert_eq!(scores["B"], 0);
        assert_eq!(scores["A"], 0);
    }

    #[test]
    fn points_go_to_the_guesser() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("A", "A", p(0.5, 0.5));
        s.set("B", "A", p(0.5, 0.5));
        // A never guessed B, B never self-placed.
        let scores = calculate_scores(&r, &s);
        assert_eq!(scores["B"], 100);
        assert_eq!(scores["A"], 0);
    }

    #[test]
    fn missing_self_placement_is_skipped() {
        let r = roster(&["A", "B", "C"]);
        let mut s = PlacementStore::new();
        s.set("B", "A", p(0.1, 0.1));
        s.set("C", "A", p(0.1, 0.1));
        s.set("B", "B", p(0.3, 0.3));
        s.set("C", "B", p(0.3, 0.3));
        let scores = calculate_scores(&r, &s);
        assert_eq!(scores["C"], 100);
        assert_eq!(scores["B"], 0);
        assert_eq!(scores["A"], 0);
    }

    #[test]
    fn own_self_placement_earns_nothing() {
        let r = roster(&["A"]);
        let mut s = PlacementStore::new();
        s.set("A", "A", p(0.5, 0.5));
        assert_eq!(calculate_scores(&r, &s)["A"], 0);
    }

    #[test]
    fn placements_of_players_outside_roster_are_ignored() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("Gone", "Gone", p(0.2, 0.2));
        s.set("A", "Gone", p(0.2, 0.2));
        let scores = calculate_scores(&r, &s);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["A"], 0);
    }

    #[test]
    fn sorted_scores_descend_and_ties_keep_roster_order() {
        let r = roster(&["A", "B", "C", "D"]);
        let mut s = PlacementStore::new();
        s.set("A", "A", p(0.0, 0.0));
        // C and D tie on a perfect guess, B is further off.
        s.set("B", "A", p(0.5, 0.5));
        s.set("C", "A", p(0.0, 0.0));
        s.set("D", "A", p(0.0, 0.0));

        let sorted = sorted_scores(&r, &s);
        let names: Vec<_> = sorted.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(names, ["C", "D", "B", "A"]);
        assert_eq!(sorted[0].score, 100);
        assert_eq!(sorted[2].score, 50);
        assert_eq!(sorted[3].score, 0);
    }

    #[test]
    fn scoreboard_ranks_guesses_about_one_subject() {
        let r = roster(&["A", "B", "C", "D"]);
        let mut s = PlacementStore::new();
        s.set("B", "B", p(1.0, 0.0));
        s.set("A", "B", p(0.0, 1.0));
        s.set("C", "B", p(1.0, 0.0));
        // D never placed B.

        let board = player_scoreboard("B", &r, &s);
        assert_eq!(
            board,
            vec![
                ScoreEntry::new("C", 100),
                ScoreEntry::new("A", 0),
                ScoreEntry::new("D", 0),
            ]
        );
    }

    #[test]
    fn scoreboard_empty_without_self_placement() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("A", "B", p(0.1, 0.1));
        assert!(player_scoreboard("B", &r, &s).is_empty());
        assert!(player_scoreboard("Nobody", &r, &s).is_empty());
    }

    #[test]
    fn winner_is_top_of_ranking() {
        let r = roster(&["A", "B"]);
        let mut s = PlacementStore::new();
        s.set("B", "B", p(0.4, 0.4));
        s.set("A", "B", p(0.4, 0.4));
        assert_eq!(winner(&r, &s), Some(ScoreEntry::new("A", 100)));
        assert_eq!(winner(&Roster::new(), &s), None);
    }

    fn coord() -> impl Strategy<Value = f64> {
        0.0..=1.0f64
    }

    proptest! {
        #[test]
        fn sorted_scores_are_non_increasing_and_bounded(
            pins in prop::collection::vec((coord(), coord()), 16),
        ) {
            let names = ["A", "B", "C", "D"];
            let r = roster(&names);
            let mut s = PlacementStore::new();
            for (i, (x, y)) in pins.iter().enumerate() {
                s.set(names[i / 4], names[i % 4], p(*x, *y));
            }
            let sorted = sorted_scores(&r, &s);
            prop_assert_eq!(sorted.len(), 4);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for e in &sorted {
                prop_assert!(e.score <= 100 * 3);
            }
        }
    }
}
