pub mod files;
pub mod models;
pub mod validation;

use log::info;

use crate::config::settings::StorageSettings;
use crate::errors::StoreError;
use crate::rating::types::{MatchRecord, PlayerName};
use models::GameRecord;

/// Outcome of an `add_player` call; a name already on the roster is not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlayerOutcome {
    Added,
    AlreadyExists,
}

/// In-memory roster and match log, flushed back to the backing files
/// after every mutation.
pub struct LadderStore {
    roster: Vec<PlayerName>,
    games: Vec<GameRecord>,
    storage: StorageSettings,
}

impl LadderStore {
    pub fn load(storage: &StorageSettings) -> Self {
        let roster = files::load_roster(&storage.players_path);
        let games = files::load_games(&storage.games_path);
        info!(
            "Loaded {} players and {} logged games",
            roster.len(),
            games.len()
        );

        Self {
            roster,
            games,
            storage: storage.clone(),
        }
    }

    pub fn roster(&self) -> &[PlayerName] {
        &self.roster
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Engine view of the match log, in append order.
    pub fn match_records(&self) -> Result<Vec<MatchRecord>, StoreError> {
        self.games.iter().map(GameRecord::to_match_record).collect()
    }

    pub fn add_player(&mut self, name: &str) -> Result<AddPlayerOutcome, StoreError> {
        if !validation::is_valid_player_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        if self.roster.iter().any(|existing| existing == name) {
            return Ok(AddPlayerOutcome::AlreadyExists);
        }

        self.roster.push(name.to_string());
        self.persist()?;
        Ok(AddPlayerOutcome::Added)
    }

    /// Appends a finished game dated today. Both names must already be
    /// on the roster and must differ.
    pub fn add_result(&mut self, winner: &str, loser: &str) -> Result<(), StoreError> {
        if winner == loser {
            return Err(StoreError::IdenticalParticipants(winner.to_string()));
        }
        for name in [winner, loser] {
            if !self.roster.iter().any(|existing| existing == name) {
                return Err(StoreError::UnknownPlayer(name.to_string()));
            }
        }

        let today = models::today_ladder_date();
        self.games.push(GameRecord::finished(winner, loser, &today));
        self.persist()
    }

    /// Full rewrite of both backing files; a failure propagates to the
    /// caller instead of being swallowed.
    fn persist(&self) -> Result<(), StoreError> {
        files::save_games(&self.storage.games_path, &self.games)?;
        files::save_roster(&self.storage.players_path, &self.roster)?;
        Ok(())
    }
}
