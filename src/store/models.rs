use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::rating::types::{MatchRecord, PlayerName};

/// Date layout used across the data files: `M/D/YYYY` without padding.
pub const LADDER_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// One line of the match log, exactly as stored on disk. `endDate` and
/// `winner` are absent while a game is still being played.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub players: Vec<PlayerName>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerName>,
}

impl GameRecord {
    pub fn finished(winner: &str, loser: &str, date: &str) -> Self {
        Self {
            players: vec![winner.to_string(), loser.to_string()],
            start_date: date.to_string(),
            end_date: Some(date.to_string()),
            winner: Some(winner.to_string()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some() && self.end_date.is_some()
    }

    /// Converts the wire record into engine input, parsing the end date
    /// when one is present.
    pub fn to_match_record(&self) -> Result<MatchRecord, StoreError> {
        let end_date = match &self.end_date {
            Some(raw) => Some(parse_ladder_date(raw)?),
            None => None,
        };

        Ok(MatchRecord {
            participants: self.players.clone(),
            winner: self.winner.clone(),
            end_date,
        })
    }
}

pub fn parse_ladder_date(raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, LADDER_DATE_FORMAT)
        .map_err(|_| StoreError::InvalidEndDate(raw.to_string()))
}

pub fn today_ladder_date() -> String {
    chrono::Local::now().format(LADDER_DATE_FORMAT).to_string()
}
