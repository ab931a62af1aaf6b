use std::fs;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::GameRecord;
use crate::rating::types::PlayerName;

/// Loads the roster file, falling back to an empty roster when the file
/// is missing or unreadable.
pub fn load_roster(path: &str) -> Vec<PlayerName> {
    match read_json(path) {
        Ok(roster) => roster,
        Err(error) => {
            info!("Using default player data ({error:#})");
            Vec::new()
        }
    }
}

/// Loads the match log file, falling back to an empty log.
pub fn load_games(path: &str) -> Vec<GameRecord> {
    match read_json(path) {
        Ok(games) => games,
        Err(error) => {
            info!("Using default game list data ({error:#})");
            Vec::new()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read data file: {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse data file: {path}"))
}

pub fn save_roster(path: &str, roster: &[PlayerName]) -> Result<()> {
    write_json(path, &roster)
}

pub fn save_games(path: &str, games: &[GameRecord]) -> Result<()> {
    write_json(path, &games)
}

fn write_json<T: Serialize>(path: &str, data: &T) -> Result<()> {
    let json = serde_json::to_string(data)
        .with_context(|| format!("Failed to serialize data for: {path}"))?;
    fs::write(path, json).with_context(|| format!("Failed to write data file: {path}"))
}
