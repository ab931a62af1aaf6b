use chrono::NaiveDate;
use log::{info, warn};

use super::types::{MatchRecord, PlayerName, RatingMap};
use crate::config::settings::RatingSettings;
use crate::errors::RatingError;

/// Recomputes every roster player's rating from the baseline by
/// replaying the finished matches in end-date order.
pub fn compute_ratings(
    roster: &[PlayerName],
    matches: &[MatchRecord],
    settings: &RatingSettings,
) -> Result<RatingMap, RatingError> {
    let mut ratings: RatingMap = roster
        .iter()
        .map(|name| (name.clone(), settings.baseline_rating))
        .collect();

    let finished = finished_in_play_order(matches);
    info!(
        "Replaying {} finished games out of {} logged",
        finished.len(),
        matches.len()
    );

    for game in &finished {
        apply_game(&mut ratings, game, settings)?;
    }

    Ok(ratings)
}

struct FinishedGame<'a> {
    participants: &'a [PlayerName],
    winner: &'a str,
    end_date: NaiveDate,
}

fn finished_in_play_order(matches: &[MatchRecord]) -> Vec<FinishedGame<'_>> {
    let mut finished: Vec<FinishedGame> = matches
        .iter()
        .filter_map(|record| {
            let winner = record.winner.as_deref()?;
            let end_date = record.end_date?;
            if record.participants.len() < 2 {
                warn!("Skipping finished game with fewer than two participants");
                return None;
            }
            Some(FinishedGame {
                participants: &record.participants,
                winner,
                end_date,
            })
        })
        .collect();

    // Stable sort: games ending the same day keep their log order.
    finished.sort_by_key(|game| game.end_date);
    finished
}

/// Applies one game to the running ratings. Every participant's update
/// reads the pre-game snapshot, so within a game no update can see
/// another participant's new rating.
fn apply_game(
    ratings: &mut RatingMap,
    game: &FinishedGame<'_>,
    settings: &RatingSettings,
) -> Result<(), RatingError> {
    let before = pre_game_snapshot(ratings, game.participants)?;

    for (idx, name) in game.participants.iter().enumerate() {
        let own = before[idx];
        let opposition = opposition_rating(&before, idx);
        let expected = expected_score(own, opposition, settings.scale);
        let actual = if name == game.winner { 1.0 } else { 0.0 };
        let updated = own + settings.k_factor * (actual - expected);
        ratings.insert(name.clone(), updated.round() as i32);
    }

    Ok(())
}

fn pre_game_snapshot(
    ratings: &RatingMap,
    participants: &[PlayerName],
) -> Result<Vec<f64>, RatingError> {
    participants
        .iter()
        .map(|name| {
            ratings
                .get(name)
                .map(|&rating| f64::from(rating))
                .ok_or_else(|| RatingError::UnknownPlayer(name.clone()))
        })
        .collect()
}

/// Mean pre-game rating of everyone except the player at `own_idx`.
/// With two participants this is simply the opponent's rating.
fn opposition_rating(before: &[f64], own_idx: usize) -> f64 {
    let others = (before.len() - 1) as f64;
    let total: f64 = before
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != own_idx)
        .map(|(_, rating)| rating)
        .sum();
    total / others
}

fn expected_score(own: f64, opposition: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opposition - own) / scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RatingSettings {
        RatingSettings::default()
    }

    fn roster(names: &[&str]) -> Vec<PlayerName> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, day).unwrap()
    }

    fn finished(winner: &str, loser: &str, end_date: NaiveDate) -> MatchRecord {
        MatchRecord {
            participants: vec![winner.to_string(), loser.to_string()],
            winner: Some(winner.to_string()),
            end_date: Some(end_date),
        }
    }

    fn pending(first: &str, second: &str) -> MatchRecord {
        MatchRecord {
            participants: vec![first.to_string(), second.to_string()],
            winner: None,
            end_date: None,
        }
    }

    #[test]
    fn empty_log_keeps_everyone_at_baseline() {
        let roster = roster(&["alice", "bob", "carol"]);
        let ratings = compute_ratings(&roster, &[], &settings()).unwrap();

        assert_eq!(ratings.len(), 3);
        assert!(ratings.values().all(|&rating| rating == 1000));
    }

    #[test]
    fn pending_games_do_not_move_ratings() {
        let roster = roster(&["alice", "bob"]);
        let log = vec![pending("alice", "bob")];
        let ratings = compute_ratings(&roster, &log, &settings()).unwrap();

        assert_eq!(ratings["alice"], 1000);
        assert_eq!(ratings["bob"], 1000);
    }

    #[test]
    fn first_win_moves_both_players_off_baseline() {
        let roster = roster(&["alice", "bob"]);
        let log = vec![finished("alice", "bob", day(1))];
        let ratings = compute_ratings(&roster, &log, &settings()).unwrap();

        // Both expected scores are 0.5, so each delta is 12.5 before
        // rounding to the nearest integer.
        assert_eq!(ratings["alice"], 1013);
        assert_eq!(ratings["bob"], 988);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let roster = roster(&["alice", "bob", "carol"]);
        let log = vec![
            finished("alice", "bob", day(1)),
            finished("carol", "alice", day(2)),
        ];

        let first = compute_ratings(&roster, &log, &settings()).unwrap();
        let second = compute_ratings(&roster, &log, &settings()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn end_date_order_matters_for_shared_participants() {
        let roster = roster(&["alice", "bob", "carol"]);
        let alice_wins_first = vec![
            finished("alice", "bob", day(1)),
            finished("carol", "alice", day(2)),
        ];
        let alice_wins_last = vec![
            finished("alice", "bob", day(2)),
            finished("carol", "alice", day(1)),
        ];

        let first = compute_ratings(&roster, &alice_wins_first, &settings()).unwrap();
        let second = compute_ratings(&roster, &alice_wins_last, &settings()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn disjoint_games_are_order_independent() {
        let roster = roster(&["alice", "bob", "carol", "dave"]);
        let one_order = vec![
            finished("alice", "bob", day(1)),
            finished("carol", "dave", day(2)),
        ];
        let other_order = vec![
            finished("alice", "bob", day(2)),
            finished("carol", "dave", day(1)),
        ];

        assert_eq!(
            compute_ratings(&roster, &one_order, &settings()).unwrap(),
            compute_ratings(&roster, &other_order, &settings()).unwrap(),
        );
    }

    #[test]
    fn same_day_games_replay_in_log_order() {
        let roster = roster(&["alice", "bob"]);
        let log = vec![
            finished("alice", "bob", day(1)),
            finished("alice", "bob", day(1)),
        ];
        let ratings = compute_ratings(&roster, &log, &settings()).unwrap();

        // The second game sees 1013 vs 988, so alice is favoured and
        // gains less than the first time.
        assert_eq!(ratings["alice"], 1025);
        assert_eq!(ratings["bob"], 976);
    }

    #[test]
    fn expected_scores_are_complementary() {
        let favourite = expected_score(1200.0, 1000.0, 400.0);
        let underdog = expected_score(1000.0, 1200.0, 400.0);

        assert!((favourite + underdog - 1.0).abs() < 1e-12);
        assert!(favourite > 0.75 && favourite < 0.77);
    }

    #[test]
    fn unknown_participant_is_an_error() {
        let roster = roster(&["alice"]);
        let log = vec![finished("alice", "mallory", day(1))];

        let err = compute_ratings(&roster, &log, &settings()).unwrap_err();
        assert_eq!(err, RatingError::UnknownPlayer("mallory".to_string()));
    }
}
