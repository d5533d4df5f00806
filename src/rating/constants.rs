use crate::domain::Position;

use super::types::{RatingValue, SubRatings};

pub const MIN_RATING: RatingValue = 1;
pub const MAX_RATING: RatingValue = 99;

/// Physique shown for a player without any games
pub const DEFAULT_PHYSIQUE: RatingValue = 70;

/// Pseudo-count prior used by the shrinkage estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prior {
    pub rate: f64,
    pub weight: f64,
}

impl Prior {
    pub const fn new(rate: f64, weight: f64) -> Self {
        Self { rate, weight }
    }
}

pub const ACE_PRIOR: Prior = Prior::new(0.05, 15.0);
pub const SERVICE_ERROR_PRIOR: Prior = Prior::new(0.10, 15.0);
/// Pass grades are on a 0-3 scale
pub const PASS_PRIOR: Prior = Prior::new(1.5, 10.0);
pub const SET_PRIOR: Prior = Prior::new(1.5, 10.0);
pub const SETTING_ERROR_PRIOR: Prior = Prior::new(0.10, 10.0);
pub const ATTACK_EFFICIENCY_PRIOR: Prior = Prior::new(0.30, 15.0);
pub const TOTAL_ERROR_PRIOR: Prior = Prior::new(0.15, 20.0);

pub const SERVE_SCALE: f64 = 76.0;
pub const ACE_RATE_MULTIPLIER: f64 = 3.0;
pub const RECEIVE_SCALE: f64 = 33.0;
pub const MAX_GRADE: f64 = 3.0;
pub const SET_QUALITY_SHARE: f64 = 0.8;
pub const SET_ACCURACY_SHARE: f64 = 0.2;
pub const ATTACK_SCALE: f64 = 165.0;
pub const BLOCK_POINTS_PER_GAME_CAP: f64 = 6.0;
pub const DIGS_PER_GAME_CAP: f64 = 15.0;
/// Error rate at which mental bottoms out
pub const MENTAL_ERROR_CEILING: f64 = 0.30;
pub const MENTAL_EXPONENT: f64 = 1.2;
pub const ACTIONS_PER_GAME_CAP: f64 = 30.0;
pub const PHYSIQUE_BASE: f64 = 50.0;
pub const PHYSIQUE_RANGE: f64 = 49.0;

pub const DEFAULT_OPPONENT_TIER: u8 = 5;

/// Highest rating attainable in a single game, indexed by opponent tier 1..=9
pub const TIER_CEILINGS: [RatingValue; 9] = [15, 25, 35, 45, 55, 65, 75, 87, 99];

/// Skill weights for one position, in sub-rating order
pub type WeightProfile = SubRatings<f64>;

pub const SETTER_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.10,
    receive: 0.05,
    set: 0.40,
    block: 0.05,
    attack: 0.05,
    dig: 0.10,
    mental: 0.15,
    physique: 0.10,
};

pub const OUTSIDE_HITTER_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.10,
    receive: 0.20,
    set: 0.0,
    block: 0.10,
    attack: 0.30,
    dig: 0.10,
    mental: 0.10,
    physique: 0.10,
};

pub const OPPOSITE_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.10,
    receive: 0.05,
    set: 0.0,
    block: 0.15,
    attack: 0.40,
    dig: 0.05,
    mental: 0.15,
    physique: 0.10,
};

pub const MIDDLE_BLOCKER_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.10,
    receive: 0.0,
    set: 0.0,
    block: 0.40,
    attack: 0.25,
    dig: 0.0,
    mental: 0.15,
    physique: 0.10,
};

pub const LIBERO_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.0,
    receive: 0.30,
    set: 0.10,
    block: 0.0,
    attack: 0.0,
    dig: 0.30,
    mental: 0.20,
    physique: 0.10,
};

pub const DEFENSIVE_SPECIALIST_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.15,
    receive: 0.25,
    set: 0.05,
    block: 0.0,
    attack: 0.0,
    dig: 0.30,
    mental: 0.15,
    physique: 0.10,
};

pub const UNIVERSAL_WEIGHTS: WeightProfile = SubRatings {
    serve: 0.125,
    receive: 0.125,
    set: 0.125,
    block: 0.125,
    attack: 0.125,
    dig: 0.125,
    mental: 0.125,
    physique: 0.125,
};

pub fn weights_for(position: Position) -> &'static WeightProfile {
    match position {
        Position::Setter => &SETTER_WEIGHTS,
        Position::OutsideHitter => &OUTSIDE_HITTER_WEIGHTS,
        Position::Opposite => &OPPOSITE_WEIGHTS,
        Position::MiddleBlocker => &MIDDLE_BLOCKER_WEIGHTS,
        Position::Libero => &LIBERO_WEIGHTS,
        Position::DefensiveSpecialist => &DEFENSIVE_SPECIALIST_WEIGHTS,
        Position::Universal => &UNIVERSAL_WEIGHTS,
    }
}

/// Round to the nearest integer and clamp into the rating range
pub fn to_rating(value: f64) -> RatingValue {
    if value.is_nan() {
        return MIN_RATING;
    }
    value
        .round()
        .clamp(MIN_RATING as f64, MAX_RATING as f64) as RatingValue
}
