pub mod elo;
pub mod standings;
pub mod types;

pub use elo::compute_ratings;
pub use standings::standings;
pub use types::{MatchRecord, PlayerName, RatingMap, RatingValue, Standing};
