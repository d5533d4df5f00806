use crate::config::TeamSettings;

use super::constants::{to_rating, MIN_RATING};
use super::types::{PlayerRating, SubRatings, TeamRating};

/// Average the ratings of players who have at least one game
pub fn calculate_team_rating(ratings: &[PlayerRating], settings: &TeamSettings) -> TeamRating {
    let valid: Vec<&PlayerRating> = ratings.iter().filter(|r| r.games_played > 0).collect();

    if valid.is_empty() {
        return TeamRating {
            overall: MIN_RATING,
            sub_ratings: SubRatings::uniform(MIN_RATING),
            is_provisional: true,
            rated_players: 0,
        };
    }

    let overall = mean(valid.iter().map(|r| r.overall), valid.len());
    let sub_ratings = SubRatings::<u8>::default()
        .map(|skill, _| mean(valid.iter().map(|r| r.sub_ratings.get(skill)), valid.len()));

    TeamRating {
        overall,
        sub_ratings,
        is_provisional: valid.len() < settings.min_rated_players,
        rated_players: valid.len() as u32,
    }
}

fn mean<I: Iterator<Item = u8>>(values: I, count: usize) -> u8 {
    let total: u32 = values.map(u32::from).sum();
    to_rating(total as f64 / count as f64)
}
