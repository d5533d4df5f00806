use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type EventId = i64;

/// Raw counting stats for one player in one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    pub player_id: PlayerId,
    pub event_id: EventId,
    pub attack_kills: u32,
    pub attack_errors: u32,
    pub attack_attempts: u32,
    pub service_aces: u32,
    pub service_errors: u32,
    pub serve_attempts: u32,
    pub digs: u32,
    pub block_solos: u32,
    pub block_assists: u32,
    pub block_touches: u32,
    pub pass_attempts: u32,
    /// Sum of pass grades, each on a 0-3 scale
    pub pass_sum: u32,
    pub set_attempts: u32,
    pub set_sum: u32,
    pub setting_errors: u32,
    pub ball_handling_errors: u32,
    pub sets_played: u32,
    pub rotations_played: u32,
    /// Rotation the player started in, 1 to 6. Informational only
    pub rotation_number: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    #[default]
    Match,
    Practice,
    Other,
}

/// Event metadata needed by the rating pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    pub event_id: EventId,
    pub start_time: DateTime<Utc>,
    /// Opponent strength, 1 (weakest) to 9 (strongest). Kept as read; any
    /// other value rates as the default tier
    #[serde(default)]
    pub opponent_tier: Option<i64>,
    #[serde(default)]
    pub kind: EventKind,
}

impl EventContext {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

/// One game in a player's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub entry: StatEntry,
    pub context: EventContext,
}

impl GameRecord {
    pub fn new(entry: StatEntry, context: EventContext) -> Self {
        Self { entry, context }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
    NotSelected,
}

impl AttendanceStatus {
    pub fn counts_as_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub player_id: PlayerId,
    pub event_id: EventId,
    pub event_time: DateTime<Utc>,
    #[serde(default)]
    pub event_kind: EventKind,
    pub status: AttendanceStatus,
}

/// Primary court position, selects the skill weight profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Setter,
    OutsideHitter,
    Opposite,
    MiddleBlocker,
    Libero,
    DefensiveSpecialist,
    Universal,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Setter,
        Position::OutsideHitter,
        Position::Opposite,
        Position::MiddleBlocker,
        Position::Libero,
        Position::DefensiveSpecialist,
        Position::Universal,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Position::Setter => "setter",
            Position::OutsideHitter => "outside_hitter",
            Position::Opposite => "opposite",
            Position::MiddleBlocker => "middle_blocker",
            Position::Libero => "libero",
            Position::DefensiveSpecialist => "defensive_specialist",
            Position::Universal => "universal",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        let position = match normalized.as_str() {
            "setter" | "s" => Position::Setter,
            "outside_hitter" | "outside" | "oh" => Position::OutsideHitter,
            "opposite" | "opposite_hitter" | "opp" => Position::Opposite,
            "middle_blocker" | "middle" | "mb" => Position::MiddleBlocker,
            "libero" | "l" => Position::Libero,
            "defensive_specialist" | "ds" => Position::DefensiveSpecialist,
            "universal" | "u" => Position::Universal,
            _ => bail!("Unknown position: {:?}", s),
        };
        Ok(position)
    }
}

/// Roster member as handed over by the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Unparsed position identifier
    pub position: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
