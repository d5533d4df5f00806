use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::RatingSettings;
use crate::domain::{EventId, GameRecord, Position};

use super::aggregation::aggregate;
use super::ceiling::opponent_ceiling;
use super::constants::{MAX_RATING, MIN_RATING, WeightProfile, to_rating, weights_for};
use super::skills::calculate_sub_ratings;
use super::types::{AggregatedStats, PlayerRating, SubRatings};
use super::weighting::calculate_weight;

/// How a single game feeds into the overall rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContribution {
    pub event_id: EventId,
    pub performance_score: f64,
    pub opponent_max: f64,
    pub game_rating: f64,
    pub weight: f64,
}

/// Rates a player from their full game history.
///
/// Each game is rated on its own, capped by the opponent tier ceiling and
/// averaged with recency weights into the overall number. Sub-ratings come
/// from the whole history at once and are scaled by the recency-weighted
/// average ceiling so they stay in proportion to the overall.
pub fn calculate_player_rating(
    history: &[GameRecord],
    position: Position,
    current_date: NaiveDate,
    settings: &RatingSettings,
) -> PlayerRating {
    if history.is_empty() {
        return unrated();
    }

    let contributions = game_contributions(history, position, current_date, settings);
    let totals = WeightedTotals::from_contributions(&contributions);

    let overall = to_rating(totals.weighted_rating / totals.total_weight);
    let tier_scale = totals.weighted_ceiling / totals.total_weight / MAX_RATING as f64;
    let raw = calculate_sub_ratings(&aggregate(history));
    let sub_ratings = scale_sub_ratings(&raw, tier_scale);

    let games_played = history.len() as u32;
    debug!(
        "Rated {} games as {}: overall {} (tier scale {:.3})",
        games_played, position, overall, tier_scale
    );

    PlayerRating {
        overall,
        sub_ratings,
        is_provisional: history.len() < settings.provisional_games,
        games_played,
    }
}

/// Per-game ratings, ceilings and recency weights for a history
pub fn game_contributions(
    history: &[GameRecord],
    position: Position,
    current_date: NaiveDate,
    settings: &RatingSettings,
) -> Vec<GameContribution> {
    let weights = weights_for(position);
    history
        .iter()
        .map(|game| rate_game(game, weights, current_date, settings))
        .collect()
}

fn rate_game(
    game: &GameRecord,
    weights: &WeightProfile,
    current_date: NaiveDate,
    settings: &RatingSettings,
) -> GameContribution {
    let sub_ratings = calculate_sub_ratings(&aggregate(std::slice::from_ref(game)));
    let performance_score = performance_score(&sub_ratings, weights);
    let opponent_max = opponent_ceiling(game.context.opponent_tier) as f64;

    GameContribution {
        event_id: game.context.event_id,
        performance_score,
        opponent_max,
        game_rating: opponent_max * (performance_score / MAX_RATING as f64),
        weight: calculate_weight(game.context.date(), current_date, settings),
    }
}

/// Position-weighted combination of sub-ratings, kept within the rating range
pub fn performance_score(sub_ratings: &SubRatings, weights: &WeightProfile) -> f64 {
    let score: f64 = sub_ratings
        .values()
        .iter()
        .zip(weights.values().iter())
        .map(|(&rating, &weight)| rating as f64 * weight)
        .sum();
    score.clamp(MIN_RATING as f64, MAX_RATING as f64)
}

fn scale_sub_ratings(raw: &SubRatings, tier_scale: f64) -> SubRatings {
    raw.map(|_, value| to_rating(value as f64 * tier_scale))
}

fn unrated() -> PlayerRating {
    PlayerRating {
        overall: MIN_RATING,
        sub_ratings: calculate_sub_ratings(&AggregatedStats::default()),
        is_provisional: true,
        games_played: 0,
    }
}

#[derive(Debug, Default)]
struct WeightedTotals {
    weighted_rating: f64,
    weighted_ceiling: f64,
    total_weight: f64,
}

impl WeightedTotals {
    fn from_contributions(contributions: &[GameContribution]) -> Self {
        contributions.iter().fold(Self::default(), |mut totals, c| {
            totals.weighted_rating += c.game_rating * c.weight;
            totals.weighted_ceiling += c.opponent_max * c.weight;
            totals.total_weight += c.weight;
            totals
        })
    }
}
