use crate::config::RatingSettings;
use crate::domain::{GameRecord, Position};

use super::player::calculate_player_rating;
use super::types::ProgressionPoint;

/// Rating after each game, recomputed from the cumulative prefix of the history.
///
/// Every point is evaluated as of its own game date, so the series shows the
/// rating a player held right after that game.
pub fn calculate_progression(
    history: &[GameRecord],
    position: Position,
    settings: &RatingSettings,
) -> Vec<ProgressionPoint> {
    let ordered = chronological(history);

    (1..=ordered.len())
        .map(|len| {
            let prefix = &ordered[..len];
            let last = &prefix[len - 1].context;
            let rating = calculate_player_rating(prefix, position, last.date(), settings);
            ProgressionPoint {
                event_id: last.event_id,
                date: last.date(),
                overall: rating.overall,
                sub_ratings: rating.sub_ratings,
                games_played: rating.games_played,
            }
        })
        .collect()
}

fn chronological(history: &[GameRecord]) -> Vec<GameRecord> {
    let mut ordered = history.to_vec();
    ordered.sort_by(|a, b| {
        a.context
            .start_time
            .cmp(&b.context.start_time)
            .then(a.context.event_id.cmp(&b.context.event_id))
    });
    ordered
}
