use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "elo-ladder backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the ladder server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Recompute ratings from the data files and print the ladder
    Standings,
}
