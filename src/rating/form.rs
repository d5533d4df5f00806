use std::cmp::Reverse;

use crate::config::FormSettings;
use crate::domain::{AttendanceRecord, EventKind};

use super::constants::{to_rating, MAX_RATING, MIN_RATING};
use super::types::PlayerForm;

/// Attendance-based form over the most recent practices
pub fn calculate_form(records: &[AttendanceRecord], settings: &FormSettings) -> PlayerForm {
    let recent = recent_practices(records, settings.window);

    let practices_total = recent.len() as u32;
    let practices_attended = recent
        .iter()
        .filter(|r| r.status.counts_as_attended())
        .count() as u32;

    PlayerForm {
        practices_attended,
        practices_total,
        form_rating: form_rating(practices_attended, practices_total, settings),
    }
}

fn recent_practices(records: &[AttendanceRecord], window: usize) -> Vec<&AttendanceRecord> {
    let mut practices: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.event_kind == EventKind::Practice)
        .collect();
    practices.sort_by_key(|r| Reverse((r.event_time, r.event_id)));
    practices.truncate(window);
    practices
}

fn form_rating(attended: u32, total: u32, settings: &FormSettings) -> u8 {
    if total == 0 || settings.attendance_cap == 0 {
        return MIN_RATING;
    }
    let capped = attended.min(settings.attendance_cap as u32) as f64;
    to_rating(capped / settings.attendance_cap as f64 * MAX_RATING as f64)
}
