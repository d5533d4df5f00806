use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{EventId, PlayerId};

pub type RatingValue = u8;

/// Cumulative sums and rates over one or more games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub games_played: u32,

    pub attack_kills: u64,
    pub attack_errors: u64,
    pub attack_attempts: u64,
    pub service_aces: u64,
    pub service_errors: u64,
    pub serve_attempts: u64,
    pub digs: u64,
    pub block_solos: u64,
    pub block_assists: u64,
    pub block_touches: u64,
    pub pass_attempts: u64,
    pub pass_sum: u64,
    pub set_attempts: u64,
    pub set_sum: u64,
    pub setting_errors: u64,
    pub ball_handling_errors: u64,
    pub sets_played: u64,
    pub rotations_played: u64,

    pub kill_pct: f64,
    pub serve_pct: f64,
    pub pass_rating: f64,
    pub set_rating: f64,
    pub error_rate: f64,
    pub total_blocks: f64,

    pub kills_per_game: f64,
    pub aces_per_game: f64,
    pub digs_per_game: f64,
    pub blocks_per_game: f64,
    pub errors_per_game: f64,
}

impl AggregatedStats {
    pub fn total_errors(&self) -> u64 {
        self.attack_errors + self.service_errors + self.ball_handling_errors
    }

    pub fn total_actions(&self) -> u64 {
        self.attack_attempts + self.serve_attempts + self.pass_attempts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Serve,
    Receive,
    Set,
    Block,
    Attack,
    Dig,
    Mental,
    Physique,
}

impl Skill {
    pub const ALL: [Skill; 8] = [
        Skill::Serve,
        Skill::Receive,
        Skill::Set,
        Skill::Block,
        Skill::Attack,
        Skill::Dig,
        Skill::Mental,
        Skill::Physique,
    ];
}

/// One value per skill. Integer ratings by default, also used for weight profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRatings<T = RatingValue> {
    pub serve: T,
    pub receive: T,
    pub set: T,
    pub block: T,
    pub attack: T,
    pub dig: T,
    pub mental: T,
    pub physique: T,
}

impl<T: Copy> SubRatings<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            serve: value,
            receive: value,
            set: value,
            block: value,
            attack: value,
            dig: value,
            mental: value,
            physique: value,
        }
    }

    pub fn get(&self, skill: Skill) -> T {
        match skill {
            Skill::Serve => self.serve,
            Skill::Receive => self.receive,
            Skill::Set => self.set,
            Skill::Block => self.block,
            Skill::Attack => self.attack,
            Skill::Dig => self.dig,
            Skill::Mental => self.mental,
            Skill::Physique => self.physique,
        }
    }

    pub fn values(&self) -> [T; 8] {
        Skill::ALL.map(|skill| self.get(skill))
    }

    pub fn map<U, F: FnMut(Skill, T) -> U>(&self, mut f: F) -> SubRatings<U> {
        SubRatings {
            serve: f(Skill::Serve, self.serve),
            receive: f(Skill::Receive, self.receive),
            set: f(Skill::Set, self.set),
            block: f(Skill::Block, self.block),
            attack: f(Skill::Attack, self.attack),
            dig: f(Skill::Dig, self.dig),
            mental: f(Skill::Mental, self.mental),
            physique: f(Skill::Physique, self.physique),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub overall: RatingValue,
    pub sub_ratings: SubRatings,
    pub is_provisional: bool,
    pub games_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerForm {
    pub practices_attended: u32,
    pub practices_total: u32,
    pub form_rating: RatingValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRating {
    pub overall: RatingValue,
    pub sub_ratings: SubRatings,
    pub is_provisional: bool,
    pub rated_players: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardType {
    Mvp,
    TopAttacker,
    TopServer,
    TopDefender,
    TopPasser,
}

impl AwardType {
    pub fn as_str(&self) -> &str {
        match self {
            AwardType::Mvp => "mvp",
            AwardType::TopAttacker => "top_attacker",
            AwardType::TopServer => "top_server",
            AwardType::TopDefender => "top_defender",
            AwardType::TopPasser => "top_passer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub event_id: EventId,
    pub award_type: AwardType,
    pub player_id: PlayerId,
    pub value: f64,
}

/// Rating as it stood right after one game of a player's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    pub event_id: EventId,
    pub date: NaiveDate,
    pub overall: RatingValue,
    pub sub_ratings: SubRatings,
    pub games_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player_id: PlayerId,
    pub overall: RatingValue,
    pub games_played: u32,
    pub is_provisional: bool,
}
