use crate::domain::{GameRecord, StatEntry};

use super::types::AggregatedStats;

/// Sum a player's games into cumulative totals and rates
pub fn aggregate(games: &[GameRecord]) -> AggregatedStats {
    aggregate_entries(games.iter().map(|g| &g.entry))
}

pub fn aggregate_entries<'a, I>(entries: I) -> AggregatedStats
where
    I: IntoIterator<Item = &'a StatEntry>,
{
    let mut stats = AggregatedStats::default();
    for entry in entries {
        add_entry(&mut stats, entry);
    }
    compute_rates(&mut stats);
    stats
}

fn add_entry(stats: &mut AggregatedStats, entry: &StatEntry) {
    stats.games_played += 1;
    stats.attack_kills += u64::from(entry.attack_kills);
    stats.attack_errors += u64::from(entry.attack_errors);
    stats.attack_attempts += u64::from(entry.attack_attempts);
    stats.service_aces += u64::from(entry.service_aces);
    stats.service_errors += u64::from(entry.service_errors);
    stats.serve_attempts += u64::from(entry.serve_attempts);
    stats.digs += u64::from(entry.digs);
    stats.block_solos += u64::from(entry.block_solos);
    stats.block_assists += u64::from(entry.block_assists);
    stats.block_touches += u64::from(entry.block_touches);
    stats.pass_attempts += u64::from(entry.pass_attempts);
    stats.pass_sum += u64::from(entry.pass_sum);
    stats.set_attempts += u64::from(entry.set_attempts);
    stats.set_sum += u64::from(entry.set_sum);
    stats.setting_errors += u64::from(entry.setting_errors);
    stats.ball_handling_errors += u64::from(entry.ball_handling_errors);
    stats.sets_played += u64::from(entry.sets_played);
    stats.rotations_played += u64::from(entry.rotations_played);
}

fn compute_rates(stats: &mut AggregatedStats) {
    stats.kill_pct = ratio(
        stats.attack_kills as f64 - stats.attack_errors as f64,
        stats.attack_attempts,
    );
    stats.serve_pct = ratio(
        stats.service_aces as f64 - stats.service_errors as f64,
        stats.serve_attempts,
    );
    stats.pass_rating = ratio(stats.pass_sum as f64, stats.pass_attempts);
    stats.set_rating = ratio(stats.set_sum as f64, stats.set_attempts);
    stats.error_rate = ratio(stats.total_errors() as f64, stats.total_actions());
    stats.total_blocks = stats.block_solos as f64 + 0.5 * stats.block_assists as f64;

    let games = u64::from(stats.games_played);
    stats.kills_per_game = ratio(stats.attack_kills as f64, games);
    stats.aces_per_game = ratio(stats.service_aces as f64, games);
    stats.digs_per_game = ratio(stats.digs as f64, games);
    stats.blocks_per_game = ratio(stats.total_blocks, games);
    stats.errors_per_game = ratio(stats.total_errors() as f64, games);
}

/// Division that yields 0 for an empty denominator
pub fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::fixtures::{game, game_on, sample_entry};

    #[test]
    fn test_empty_history_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats, AggregatedStats::default());
        assert_eq!(stats.kill_pct, 0.0);
        assert_eq!(stats.digs_per_game, 0.0);
    }

    #[test]
    fn test_sums_and_rates() {
        let games = vec![
            game(StatEntry {
                attack_kills: 8,
                attack_errors: 2,
                attack_attempts: 20,
                service_aces: 2,
                service_errors: 1,
                serve_attempts: 10,
                pass_attempts: 10,
                pass_sum: 22,
                block_solos: 1,
                block_assists: 3,
                digs: 6,
                ..Default::default()
            }),
            game(StatEntry {
                attack_kills: 4,
                attack_errors: 4,
                attack_attempts: 10,
                ball_handling_errors: 1,
                digs: 4,
                ..Default::default()
            }),
        ];

        let stats = aggregate(&games);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.attack_kills, 12);
        assert_eq!(stats.attack_attempts, 30);
        assert!((stats.kill_pct - 6.0 / 30.0).abs() < 1e-12);
        assert!((stats.serve_pct - 0.1).abs() < 1e-12);
        assert!((stats.pass_rating - 2.2).abs() < 1e-12);
        assert_eq!(stats.set_rating, 0.0);
        // (6 + 1 + 1) / (30 + 10 + 10)
        assert!((stats.error_rate - 8.0 / 50.0).abs() < 1e-12);
        assert!((stats.total_blocks - 2.5).abs() < 1e-12);
        assert!((stats.digs_per_game - 5.0).abs() < 1e-12);
        assert!((stats.kills_per_game - 6.0).abs() < 1e-12);
        assert!((stats.blocks_per_game - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_kill_pct_may_be_negative() {
        let stats = aggregate(&[game(StatEntry {
            attack_kills: 1,
            attack_errors: 5,
            attack_attempts: 10,
            ..Default::default()
        })]);
        assert!((stats.kill_pct + 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_aggregation_is_deterministic_and_order_independent() {
        let games = vec![
            game_on(sample_entry(1), "2025-01-10", Some(3)),
            game_on(sample_entry(2), "2025-02-10", Some(7)),
            game_on(sample_entry(3), "2025-03-10", None),
        ];
        let mut reversed = games.clone();
        reversed.reverse();

        let first = aggregate(&games);
        let second = aggregate(&games);
        let third = aggregate(&reversed);

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(first.error_rate.to_bits(), third.error_rate.to_bits());
    }
}
