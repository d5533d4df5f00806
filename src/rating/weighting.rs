use chrono::NaiveDate;

use crate::config::RatingSettings;

pub fn calculate_weight(game_date: NaiveDate, current_date: NaiveDate, settings: &RatingSettings) -> f64 {
    let age_days = calculate_age_days(game_date, current_date);
    apply_linear_decay(age_days, settings)
}

/// Whole calendar days between the game and the evaluation date, never negative
fn calculate_age_days(game_date: NaiveDate, current_date: NaiveDate) -> i64 {
    current_date.signed_duration_since(game_date).num_days().max(0)
}

fn apply_linear_decay(age_days: i64, settings: &RatingSettings) -> f64 {
    // weight = max(floor, 1 - days / window)
    let decayed = 1.0 - (age_days as f64) / settings.recency_window_days;
    decayed.max(settings.recency_floor)
}
