//! End-to-end flow: mutate the store on disk, reload, recompute standings.

use elo_ladder::config::settings::{RatingSettings, StorageSettings};
use elo_ladder::rating::{compute_ratings, standings};
use elo_ladder::store::LadderStore;
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> StorageSettings {
    StorageSettings {
        players_path: dir
            .path()
            .join("players.json")
            .to_string_lossy()
            .into_owned(),
        games_path: dir.path().join("games.json").to_string_lossy().into_owned(),
    }
}

#[test]
fn submitted_results_move_the_ladder() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let mut store = LadderStore::load(&storage);
    store.add_player("alice").unwrap();
    store.add_player("bob").unwrap();
    store.add_player("carol").unwrap();
    store.add_result("alice", "bob").unwrap();

    // Reload from disk to prove the mutation was flushed.
    let store = LadderStore::load(&storage);
    let matches = store.match_records().unwrap();
    let ratings = compute_ratings(store.roster(), &matches, &RatingSettings::default()).unwrap();

    let rows = standings(store.roster(), &ratings);
    let names: Vec<&str> = rows.iter().map(|row| row.player.as_str()).collect();
    assert_eq!(names, ["alice", "carol", "bob"]);
    assert_eq!(rows[0].rating, 1013);
    assert_eq!(rows[1].rating, 1000);
    assert_eq!(rows[2].rating, 988);
}

#[test]
fn rejected_submissions_leave_the_files_untouched() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let mut store = LadderStore::load(&storage);
    store.add_player("alice").unwrap();
    store.add_player("bob").unwrap();

    assert!(store.add_result("alice", "alice").is_err());
    assert!(store.add_player("not valid!").is_err());

    let store = LadderStore::load(&storage);
    assert_eq!(store.roster().len(), 2);
    assert!(store.games().is_empty());
}
