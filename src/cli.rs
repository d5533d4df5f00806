use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "volleyball player rating engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DataArgs {
    /// Dataset JSON file with players, events, stat entries and attendance
    #[arg(short, long, default_value = "dataset.json")]
    pub data: PathBuf,
    /// Evaluation date for recency weighting (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate one player or the whole active roster
    Rate {
        #[command(flatten)]
        data: DataArgs,
        /// Only rate this player
        #[arg(short, long)]
        player: Option<i64>,
    },
    /// Team rating averaged over rated players
    Team {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Rank active players by overall rating
    Leaderboard {
        #[command(flatten)]
        data: DataArgs,
        /// Leave out provisional ratings
        #[arg(long)]
        established_only: bool,
    },
    /// Attendance-based form for every active player
    Form {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Awards for a single event
    Awards {
        #[command(flatten)]
        data: DataArgs,
        /// Event id
        #[arg(short, long)]
        event: i64,
    },
    /// Rating after each game of a player's history
    Progression {
        #[command(flatten)]
        data: DataArgs,
        /// Player id
        #[arg(short, long)]
        player: i64,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
