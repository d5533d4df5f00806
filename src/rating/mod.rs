pub mod aggregation;
pub mod awards;
pub mod ceiling;
pub mod constants;
pub mod form;
pub mod leaderboard;
pub mod player;
pub mod progression;
pub mod shrinkage;
pub mod skills;
pub mod team;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregation::aggregate;
pub use awards::calculate_awards;
pub use ceiling::opponent_ceiling;
pub use form::calculate_form;
pub use leaderboard::build_leaderboard;
pub use player::calculate_player_rating;
pub use progression::calculate_progression;
pub use shrinkage::shrink;
pub use skills::calculate_sub_ratings;
pub use team::calculate_team_rating;
pub use types::{
    AggregatedStats, Award, AwardType, LeaderboardEntry, PlayerForm, PlayerRating, ProgressionPoint,
    RatingValue, Skill, SubRatings, TeamRating,
};
pub use weighting::calculate_weight;
