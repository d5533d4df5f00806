pub mod models;

pub use models::{
    AttendanceRecord, AttendanceStatus, EventContext, EventId, EventKind, GameRecord, PlayerId,
    Position, RosterPlayer, StatEntry,
};
