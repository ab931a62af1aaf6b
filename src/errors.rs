use thiserror::Error;

/// Rejections raised at the store boundary before any mutation, plus
/// persistence failures after one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("player name '{0}' is not allowed: 2-30 letters or underscores, starting with a letter")]
    InvalidName(String),
    #[error("player '{0}' is not on the roster")]
    UnknownPlayer(String),
    #[error("winner and loser are both '{0}'")]
    IdenticalParticipants(String),
    #[error("finished game has an unreadable end date '{0}'")]
    InvalidEndDate(String),
    #[error(transparent)]
    Persist(#[from] anyhow::Error),
}

/// A finished match naming a player outside the roster is a data
/// consistency bug and surfaces here instead of getting a default rating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("match log references '{0}', which is not on the roster")]
    UnknownPlayer(String),
}
