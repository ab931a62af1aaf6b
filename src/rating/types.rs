use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

pub type PlayerName = String;
pub type RatingValue = i32;
pub type RatingMap = HashMap<PlayerName, RatingValue>;

/// Engine view of one logged match, dates already parsed. A record
/// missing its winner or end date is pending and never rated.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub participants: Vec<PlayerName>,
    pub winner: Option<PlayerName>,
    pub end_date: Option<NaiveDate>,
}

impl MatchRecord {
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() && self.end_date.is_some()
    }
}

/// One row of the ranking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player: PlayerName,
    pub rating: RatingValue,
}
