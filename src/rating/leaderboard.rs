use std::cmp::Reverse;

use crate::domain::PlayerId;

use super::types::{LeaderboardEntry, PlayerRating};

/// Rank rated players by overall, then games played, then player id
pub fn build_leaderboard(
    ratings: &[(PlayerId, PlayerRating)],
    established_only: bool,
) -> Vec<LeaderboardEntry> {
    let mut eligible: Vec<&(PlayerId, PlayerRating)> = ratings
        .iter()
        .filter(|(_, r)| r.games_played > 0)
        .filter(|(_, r)| !(established_only && r.is_provisional))
        .collect();

    eligible.sort_by_key(|(id, r)| (Reverse(r.overall), Reverse(r.games_played), *id));

    eligible
        .into_iter()
        .enumerate()
        .map(|(idx, (player_id, rating))| LeaderboardEntry {
            rank: idx as u32 + 1,
            player_id: *player_id,
            overall: rating.overall,
            games_played: rating.games_played,
            is_provisional: rating.is_provisional,
        })
        .collect()
}
