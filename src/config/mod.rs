pub mod settings;

pub use settings::{AppConfig, AwardSettings, FormSettings, RatingSettings, TeamSettings};
