use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::domain::{EventId, PlayerId, Position, RosterPlayer};
use crate::errors;
use crate::rating::{
    self, Award, LeaderboardEntry, PlayerForm, PlayerRating, ProgressionPoint, TeamRating,
};
use crate::store::DatasetStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub rating: PlayerRating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingFailure {
    pub player_id: PlayerId,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterReport {
    pub players: Vec<PlayerReport>,
    pub failures: Vec<RatingFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: TeamRating,
    pub failures: Vec<RatingFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
    pub player_id: PlayerId,
    pub name: String,
    pub form: PlayerForm,
}

/// Drives the rating engine over the players and events of a dataset
pub struct RatingService {
    config: AppConfig,
    store: DatasetStore,
    current_date: NaiveDate,
}

impl RatingService {
    pub fn new(config: AppConfig, store: DatasetStore, current_date: NaiveDate) -> Self {
        Self {
            config,
            store,
            current_date,
        }
    }

    /// Rate every active player in parallel; one player's failure does not stop the rest
    pub fn rate_roster(&self) -> RosterReport {
        let roster = self.store.active_roster();
        info!("Rating {} active players as of {}", roster.len(), self.current_date);

        let results: Vec<(PlayerId, Result<PlayerReport>)> = roster
            .par_iter()
            .map(|player| (player.id, self.rate_roster_player(player)))
            .collect();

        let mut report = RosterReport::default();
        for (player_id, result) in results {
            match result {
                Ok(player) => report.players.push(player),
                Err(e) => {
                    warn!("Failed to rate player {}: {:#}", player_id, e);
                    report.failures.push(RatingFailure {
                        player_id,
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        info!(
            "  → Rated {} players, {} failed",
            report.players.len(),
            report.failures.len()
        );
        report
    }

    pub fn rate_player(&self, player_id: PlayerId) -> Result<PlayerReport> {
        let player = self
            .store
            .player(player_id)
            .ok_or_else(|| errors::unknown_player(player_id))?;
        self.rate_roster_player(player)
    }

    fn rate_roster_player(&self, player: &RosterPlayer) -> Result<PlayerReport> {
        let position = parse_position(player)?;
        let history = self.store.history_for(player.id);
        let rating = rating::calculate_player_rating(
            &history,
            position,
            self.current_date,
            &self.config.rating,
        );

        Ok(PlayerReport {
            player_id: player.id,
            name: player.name.clone(),
            position,
            rating,
        })
    }

    pub fn team_rating(&self) -> TeamReport {
        let roster = self.rate_roster();
        let ratings: Vec<PlayerRating> = roster.players.into_iter().map(|p| p.rating).collect();
        TeamReport {
            team: rating::calculate_team_rating(&ratings, &self.config.team),
            failures: roster.failures,
        }
    }

    pub fn leaderboard(&self, established_only: bool) -> Vec<LeaderboardEntry> {
        let ratings: Vec<(PlayerId, PlayerRating)> = self
            .rate_roster()
            .players
            .into_iter()
            .map(|p| (p.player_id, p.rating))
            .collect();
        rating::build_leaderboard(&ratings, established_only)
    }

    pub fn forms(&self) -> Vec<FormReport> {
        self.store
            .active_roster()
            .par_iter()
            .map(|player| FormReport {
                player_id: player.id,
                name: player.name.clone(),
                form: rating::calculate_form(&self.store.attendance_for(player.id), &self.config.form),
            })
            .collect()
    }

    pub fn awards(&self, event_id: EventId) -> Result<Vec<Award>> {
        if self.store.event(event_id).is_none() {
            return Err(errors::unknown_event(event_id));
        }
        let entries = self.store.entries_for_event(event_id);
        let awards = rating::calculate_awards(&entries, &self.config.awards);
        info!("Event {}: {} stat lines, {} awards", event_id, entries.len(), awards.len());
        Ok(awards)
    }

    pub fn progression(&self, player_id: PlayerId) -> Result<Vec<ProgressionPoint>> {
        let player = self
            .store
            .player(player_id)
            .ok_or_else(|| errors::unknown_player(player_id))?;
        let position = parse_position(player)?;
        let history = self.store.history_for(player_id);
        Ok(rating::calculate_progression(&history, position, &self.config.rating))
    }
}

fn parse_position(player: &RosterPlayer) -> Result<Position> {
    errors::with_position_context(player.position.parse::<Position>(), player.id)
}
