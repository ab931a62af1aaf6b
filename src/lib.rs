pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod rating;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::store::LadderStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_standings() -> Result<()> {
    let config = AppConfig::new();
    let store = LadderStore::load(&config.storage);

    let matches = store.match_records()?;
    let ratings = rating::compute_ratings(store.roster(), &matches, &config.rating)?;

    for row in rating::standings(store.roster(), &ratings) {
        println!("{:<32} {:>5}", row.player, row.rating);
    }

    Ok(())
}
