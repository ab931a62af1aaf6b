use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::settings::AppConfig;
use crate::store::LadderStore;

pub mod players;
pub mod results;
pub mod standings;

/// Shared request state. The store sits behind a single mutex so
/// concurrent submissions cannot interleave read-modify-write cycles.
pub struct AppState {
    pub store: Mutex<LadderStore>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct AddPlayerForm {
    pub player: String,
}

#[derive(Deserialize)]
pub struct AddResultForm {
    pub winner: String,
    pub loser: String,
}
