use super::constants::{DEFAULT_OPPONENT_TIER, TIER_CEILINGS};
use super::types::RatingValue;

/// Resolve an optional tier, falling back to the default for missing or out-of-range values
pub fn effective_tier(tier: Option<i64>) -> u8 {
    tier
        .and_then(|t| u8::try_from(t).ok())
        .filter(|t| (1..=TIER_CEILINGS.len() as u8).contains(t))
        .unwrap_or(DEFAULT_OPPONENT_TIER)
}

/// Maximum rating a single game against this opponent tier can produce
pub fn opponent_ceiling(tier: Option<i64>) -> RatingValue {
    TIER_CEILINGS[(effective_tier(tier) - 1) as usize]
}
