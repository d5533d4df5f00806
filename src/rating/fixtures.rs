//! Builders shared by the rating tests

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{EventContext, EventKind, GameRecord, StatEntry};

pub const TODAY: &str = "2025-03-01";

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn today() -> NaiveDate {
    day(TODAY)
}

pub fn context(event_id: i64, date: &str, tier: Option<i64>) -> EventContext {
    let start = day(date).and_hms_opt(18, 0, 0).unwrap();
    EventContext {
        event_id,
        start_time: Utc.from_utc_datetime(&start),
        opponent_tier: tier,
        kind: EventKind::Match,
    }
}

/// A game played today against a default-tier opponent
pub fn game(entry: StatEntry) -> GameRecord {
    game_on(entry, TODAY, None)
}

pub fn game_on(entry: StatEntry, date: &str, tier: Option<i64>) -> GameRecord {
    let context = context(entry.event_id, date, tier);
    GameRecord::new(entry, context)
}

/// A plausible all-round stat line, varied by seed
pub fn sample_entry(seed: u32) -> StatEntry {
    StatEntry {
        player_id: 1,
        event_id: seed as i64,
        attack_kills: 6 + seed % 4,
        attack_errors: 2 + seed % 2,
        attack_attempts: 20 + seed,
        service_aces: seed % 3,
        service_errors: 1 + seed % 2,
        serve_attempts: 12,
        digs: 5 + seed,
        block_solos: seed % 2,
        block_assists: 2,
        block_touches: 1,
        pass_attempts: 10,
        pass_sum: 18 + seed,
        set_attempts: 4,
        set_sum: 8,
        setting_errors: 0,
        ball_handling_errors: seed % 2,
        sets_played: 4,
        rotations_played: 20,
        rotation_number: Some((seed % 6 + 1) as u8),
    }
}

/// A dominant stat line that saturates most skills
pub fn dominant_entry() -> StatEntry {
    StatEntry {
        player_id: 1,
        attack_kills: 30,
        attack_errors: 0,
        attack_attempts: 35,
        service_aces: 10,
        service_errors: 0,
        serve_attempts: 20,
        digs: 25,
        block_solos: 6,
        block_assists: 4,
        pass_attempts: 20,
        pass_sum: 60,
        set_attempts: 20,
        set_sum: 60,
        sets_played: 5,
        rotations_played: 30,
        ..Default::default()
    }
}
