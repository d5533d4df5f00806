#[derive(Debug, Clone)]
pub struct RatingSettings {
    /// Below this many games a rating is flagged provisional
    pub provisional_games: usize,
    /// Days over which a game's weight decays linearly
    pub recency_window_days: f64,
    /// Lowest weight any game can decay to
    pub recency_floor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            provisional_games: 3,
            recency_window_days: 120.0,
            recency_floor: 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Most recent practices considered
    pub window: usize,
    /// Attendances needed for the maximum form rating
    pub attendance_cap: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            window: 10,
            attendance_cap: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AwardSettings {
    pub min_attack_attempts: u32,
    pub min_pass_attempts: u32,
}

impl Default for AwardSettings {
    fn default() -> Self {
        Self {
            min_attack_attempts: 5,
            min_pass_attempts: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamSettings {
    /// Fewer rated players than this marks the team rating provisional
    pub min_rated_players: usize,
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self { min_rated_players: 3 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub form: FormSettings,
    pub awards: AwardSettings,
    pub team: TeamSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
