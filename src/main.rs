use anyhow::Result;

use volleyball_rating::cli::Command;
use volleyball_rating::errors;
use volleyball_rating::{
    handle_awards, handle_completions, handle_form, handle_leaderboard, handle_progression,
    handle_rate, handle_team, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {}", errors::render(&e));
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rate { data, player } => handle_rate(data, *player),
        Command::Team { data } => handle_team(data),
        Command::Leaderboard {
            data,
            established_only,
        } => handle_leaderboard(data, *established_only),
        Command::Form { data } => handle_form(data),
        Command::Awards { data, event } => handle_awards(data, *event),
        Command::Progression { data, player } => handle_progression(data, *player),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
