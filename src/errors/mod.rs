use std::path::Path;

use anyhow::Context as _;

use crate::domain::{EventId, PlayerId};

/// Add context to dataset read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read dataset from: {}", path.display())
}

/// Add context to parse errors, quoting the start of the offending input
pub fn parse_context(data_type: &str, raw: &str) -> String {
    format!(
        "Failed to parse {}. First 200 chars: {}",
        data_type,
        raw.chars().take(200).collect::<String>()
    )
}

/// One-line rendering of an error with its whole context chain
pub fn render(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

pub fn unknown_player(player_id: PlayerId) -> anyhow::Error {
    anyhow::anyhow!("Player {} not found in dataset", player_id)
}

pub fn unknown_event(event_id: EventId) -> anyhow::Error {
    anyhow::anyhow!("Event {} not found in dataset", event_id)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str, raw: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type, raw))
}

/// Wrap a position parse failure with the player it belongs to
pub fn with_position_context<T>(result: anyhow::Result<T>, player_id: PlayerId) -> anyhow::Result<T> {
    result.with_context(|| format!("Invalid position for player {}", player_id))
}
