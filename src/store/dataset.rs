use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AttendanceRecord, AttendanceStatus, EventContext, EventId, GameRecord, PlayerId, RosterPlayer,
    StatEntry,
};
use crate::errors;

/// Attendance as stored: the event time and kind come from the event table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub player_id: PlayerId,
    pub event_id: EventId,
    pub status: AttendanceStatus,
}

/// On-disk layout of a dataset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub players: Vec<RosterPlayer>,
    pub events: Vec<EventContext>,
    pub stat_entries: Vec<StatEntry>,
    pub attendance: Vec<AttendanceRow>,
}

/// Read-only view over a dataset that answers with plain collections
pub struct DatasetStore {
    players: Vec<RosterPlayer>,
    events: HashMap<EventId, EventContext>,
    entries: Vec<StatEntry>,
    attendance: Vec<AttendanceRecord>,
}

impl DatasetStore {
    /// Load a dataset JSON file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = errors::with_read_context(fs::read_to_string(path), path)?;
        let dataset: Dataset = errors::with_parse_context(serde_json::from_str(&json), "dataset", &json)?;

        info!("Loaded dataset: {}", path.display());
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let events: HashMap<EventId, EventContext> = dataset
            .events
            .into_iter()
            .map(|event| (event.event_id, event))
            .collect();

        let entries = Self::valid_entries(dataset.stat_entries, &events);
        let attendance = Self::join_attendance(dataset.attendance, &events);

        info!(
            "  → {} players, {} events, {} stat lines, {} attendance records",
            dataset.players.len(),
            events.len(),
            entries.len(),
            attendance.len()
        );

        Self {
            players: dataset.players,
            events,
            entries,
            attendance,
        }
    }

    fn valid_entries(entries: Vec<StatEntry>, events: &HashMap<EventId, EventContext>) -> Vec<StatEntry> {
        let mut seen = HashSet::new();
        let mut valid = Vec::with_capacity(entries.len());

        for entry in entries {
            if !events.contains_key(&entry.event_id) {
                warn!(
                    "Skipping stat line of player {} for unknown event {}",
                    entry.player_id, entry.event_id
                );
                continue;
            }
            if !seen.insert((entry.player_id, entry.event_id)) {
                warn!(
                    "Skipping duplicate stat line of player {} for event {}",
                    entry.player_id, entry.event_id
                );
                continue;
            }
            valid.push(entry);
        }
        valid
    }

    fn join_attendance(
        rows: Vec<AttendanceRow>,
        events: &HashMap<EventId, EventContext>,
    ) -> Vec<AttendanceRecord> {
        rows.into_iter()
            .filter_map(|row| match events.get(&row.event_id) {
                Some(event) => Some(AttendanceRecord {
                    player_id: row.player_id,
                    event_id: row.event_id,
                    event_time: event.start_time,
                    event_kind: event.kind,
                    status: row.status,
                }),
                None => {
                    warn!(
                        "Skipping attendance of player {} for unknown event {}",
                        row.player_id, row.event_id
                    );
                    None
                }
            })
            .collect()
    }

    pub fn active_roster(&self) -> Vec<RosterPlayer> {
        self.players.iter().filter(|p| p.active).cloned().collect()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&RosterPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn event(&self, event_id: EventId) -> Option<&EventContext> {
        self.events.get(&event_id)
    }

    /// Every game a player has a stat line for, paired with its event
    pub fn history_for(&self, player_id: PlayerId) -> Vec<GameRecord> {
        self.entries
            .iter()
            .filter(|e| e.player_id == player_id)
            .filter_map(|e| {
                self.events
                    .get(&e.event_id)
                    .map(|context| GameRecord::new(e.clone(), context.clone()))
            })
            .collect()
    }

    pub fn entries_for_event(&self, event_id: EventId) -> Vec<StatEntry> {
        self.entries
            .iter()
            .filter(|e| e.event_id == event_id)
            .cloned()
            .collect()
    }

    pub fn attendance_for(&self, player_id: PlayerId) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.player_id == player_id)
            .cloned()
            .collect()
    }
}
