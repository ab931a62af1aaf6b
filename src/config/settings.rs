use std::env;

#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub baseline_rating: i32,
    pub k_factor: f64,
    pub scale: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            baseline_rating: 1000,
            k_factor: 25.0,
            scale: 400.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub players_path: String,
    pub games_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            players_path: "players.json".to_string(),
            games_path: "games.json".to_string(),
        }
    }
}

impl StorageSettings {
    /// File locations, with env overrides for deployments.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            players_path: env::var("PLAYERS_FILE").unwrap_or(defaults.players_path),
            games_path: env::var("GAMES_FILE").unwrap_or(defaults.games_path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }
}
