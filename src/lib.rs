pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod services;
pub mod store;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{Cli, Command, DataArgs};
use crate::config::settings::AppConfig;
use crate::domain::{EventId, PlayerId};
use crate::services::RatingService;
use crate::store::DatasetStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rate(data: &DataArgs, player: Option<PlayerId>) -> Result<()> {
    let service = open_service(data)?;
    match player {
        Some(player_id) => print_json(&service.rate_player(player_id)?),
        None => print_json(&service.rate_roster()),
    }
}

pub fn handle_team(data: &DataArgs) -> Result<()> {
    let service = open_service(data)?;
    print_json(&service.team_rating())
}

pub fn handle_leaderboard(data: &DataArgs, established_only: bool) -> Result<()> {
    let service = open_service(data)?;
    print_json(&service.leaderboard(established_only))
}

pub fn handle_form(data: &DataArgs) -> Result<()> {
    let service = open_service(data)?;
    print_json(&service.forms())
}

pub fn handle_awards(data: &DataArgs, event_id: EventId) -> Result<()> {
    let service = open_service(data)?;
    print_json(&service.awards(event_id)?)
}

pub fn handle_progression(data: &DataArgs, player_id: PlayerId) -> Result<()> {
    let service = open_service(data)?;
    print_json(&service.progression(player_id)?)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_service(data: &DataArgs) -> Result<RatingService> {
    let config = AppConfig::new();
    let store = DatasetStore::open(&data.data)?;
    Ok(RatingService::new(config, store, evaluation_date(data.as_of)))
}

fn evaluation_date(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
