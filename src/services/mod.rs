pub mod rating;

pub use rating::{FormReport, PlayerReport, RatingFailure, RatingService, RosterReport, TeamReport};
