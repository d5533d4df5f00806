use super::aggregation::ratio;
use super::constants::*;
use super::shrinkage::shrink_with;
use super::types::{AggregatedStats, RatingValue, SubRatings};

/// Convert aggregated stats into the eight 1-99 skill ratings
pub fn calculate_sub_ratings(stats: &AggregatedStats) -> SubRatings {
    SubRatings {
        serve: serve_rating(stats),
        receive: receive_rating(stats),
        set: set_rating(stats),
        block: block_rating(stats),
        attack: attack_rating(stats),
        dig: dig_rating(stats),
        mental: mental_rating(stats),
        physique: physique_rating(stats),
    }
}

fn serve_rating(stats: &AggregatedStats) -> RatingValue {
    let ace_rate = shrink_with(stats.service_aces as f64, stats.serve_attempts, ACE_PRIOR);
    let error_rate = shrink_with(stats.service_errors as f64, stats.serve_attempts, SERVICE_ERROR_PRIOR);
    let score = ace_rate * ACE_RATE_MULTIPLIER + (1.0 - error_rate);
    to_rating(score * SERVE_SCALE)
}

fn receive_rating(stats: &AggregatedStats) -> RatingValue {
    let pass_rate = shrink_with(stats.pass_sum as f64, stats.pass_attempts, PASS_PRIOR);
    to_rating(pass_rate * RECEIVE_SCALE)
}

fn set_rating(stats: &AggregatedStats) -> RatingValue {
    let set_rate = shrink_with(stats.set_sum as f64, stats.set_attempts, SET_PRIOR);
    let error_rate = shrink_with(stats.setting_errors as f64, stats.set_attempts, SETTING_ERROR_PRIOR);
    let score = (set_rate / MAX_GRADE) * SET_QUALITY_SHARE + (1.0 - error_rate) * SET_ACCURACY_SHARE;
    to_rating(score * MAX_RATING as f64)
}

fn block_rating(stats: &AggregatedStats) -> RatingValue {
    let block_points = stats.block_solos as f64 * 2.0 + stats.block_assists as f64;
    let per_game = ratio(block_points, u64::from(stats.games_played));
    to_rating((per_game / BLOCK_POINTS_PER_GAME_CAP).min(1.0) * MAX_RATING as f64)
}

fn attack_rating(stats: &AggregatedStats) -> RatingValue {
    let net_kills = stats.attack_kills as f64 - stats.attack_errors as f64;
    let efficiency = shrink_with(net_kills, stats.attack_attempts, ATTACK_EFFICIENCY_PRIOR);
    to_rating(efficiency * ATTACK_SCALE)
}

fn dig_rating(stats: &AggregatedStats) -> RatingValue {
    let per_game = ratio(stats.digs as f64, u64::from(stats.games_played));
    to_rating((per_game / DIGS_PER_GAME_CAP).min(1.0) * MAX_RATING as f64)
}

fn mental_rating(stats: &AggregatedStats) -> RatingValue {
    let error_rate = shrink_with(stats.total_errors() as f64, stats.total_actions(), TOTAL_ERROR_PRIOR);
    let composure = (1.0 - error_rate / MENTAL_ERROR_CEILING).max(0.0);
    to_rating(MAX_RATING as f64 * composure.powf(MENTAL_EXPONENT))
}

fn physique_rating(stats: &AggregatedStats) -> RatingValue {
    if stats.games_played == 0 {
        return DEFAULT_PHYSIQUE;
    }
    let actions = stats.serve_attempts as f64 + stats.attack_attempts as f64 + stats.digs as f64;
    let per_game = ratio(actions, u64::from(stats.games_played));
    to_rating((per_game / ACTIONS_PER_GAME_CAP).min(1.0) * PHYSIQUE_RANGE + PHYSIQUE_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatEntry;
    use crate::rating::aggregation::{aggregate, aggregate_entries};
    use crate::rating::fixtures::{dominant_entry, game};
    use crate::rating::shrinkage::shrink;

    fn rate(entry: StatEntry) -> SubRatings {
        calculate_sub_ratings(&aggregate(&[game(entry)]))
    }

    fn assert_in_range(ratings: &SubRatings) {
        for value in ratings.values() {
            assert!((1..=99).contains(&value), "{:?}", ratings);
        }
    }

    #[test]
    fn test_empty_aggregate_uses_priors_and_defaults() {
        let ratings = calculate_sub_ratings(&AggregatedStats::default());

        // (0.05 * 3 + 0.9) * 76 = 79.8
        assert_eq!(ratings.serve, 80);
        assert_eq!(ratings.receive, 50);
        // (0.5 * 0.8 + 0.9 * 0.2) * 99 = 57.42
        assert_eq!(ratings.set, 57);
        assert_eq!(ratings.block, 1);
        assert!((49..=50).contains(&ratings.attack));
        assert_eq!(ratings.dig, 1);
        // 0.5^1.2 * 99 = 43.09
        assert_eq!(ratings.mental, 43);
        assert_eq!(ratings.physique, 70);
    }

    #[test]
    fn test_serve_baseline_without_attempts_is_strictly_inside_range() {
        let ratings = rate(StatEntry {
            digs: 4,
            ..Default::default()
        });
        let expected = ((shrink(0.0, 0.0, 0.05, 15.0) * 3.0
            + (1.0 - shrink(0.0, 0.0, 0.10, 15.0)))
            * 76.0)
            .round() as u8;
        assert_eq!(ratings.serve, expected);
        assert!(ratings.serve > 1 && ratings.serve < 99);
    }

    #[test]
    fn test_attack_efficiency_for_single_game() {
        let ratings = rate(StatEntry {
            attack_kills: 8,
            attack_errors: 2,
            attack_attempts: 20,
            ..Default::default()
        });
        let expected = shrink(6.0, 20.0, 0.30, 15.0) * 165.0;
        assert!((ratings.attack as f64 - expected).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn test_attack_with_more_errors_than_kills_floors_at_one() {
        let ratings = rate(StatEntry {
            attack_kills: 0,
            attack_errors: 30,
            attack_attempts: 40,
            ..Default::default()
        });
        assert_eq!(ratings.attack, 1);
    }

    #[test]
    fn test_more_kills_strictly_increase_attack_and_nothing_else_drops() {
        let base = StatEntry {
            attack_attempts: 20,
            serve_attempts: 10,
            digs: 8,
            pass_attempts: 6,
            pass_sum: 12,
            ..Default::default()
        };

        let mut previous = rate(base.clone());
        for kills in 1..=20 {
            let current = rate(StatEntry {
                attack_kills: kills,
                ..base.clone()
            });
            if previous.attack < 99 {
                assert!(current.attack > previous.attack, "kills {}", kills);
            } else {
                assert_eq!(current.attack, 99);
            }
            for (before, after) in previous.values().iter().zip(current.values().iter()) {
                assert!(after >= before);
            }
            previous = current;
        }
    }

    #[test]
    fn test_block_and_dig_saturate() {
        let ratings = rate(StatEntry {
            block_solos: 3,
            digs: 15,
            ..Default::default()
        });
        assert_eq!(ratings.block, 99);
        assert_eq!(ratings.dig, 99);

        let half = rate(StatEntry {
            block_assists: 3,
            ..Default::default()
        });
        // 3 points of 6 per game
        assert_eq!(half.block, 50);
    }

    #[test]
    fn test_block_and_dig_are_per_game() {
        let entry = StatEntry {
            block_solos: 3,
            digs: 15,
            ..Default::default()
        };
        let quiet = StatEntry::default();
        let stats = aggregate_entries([&entry, &quiet]);
        let ratings = calculate_sub_ratings(&stats);
        assert_eq!(ratings.block, 50);
        assert_eq!(ratings.dig, 50);
    }

    #[test]
    fn test_mental_bottoms_out_at_high_error_rate() {
        let ratings = rate(StatEntry {
            attack_errors: 20,
            attack_attempts: 40,
            service_errors: 10,
            serve_attempts: 20,
            ..Default::default()
        });
        assert_eq!(ratings.mental, 1);
    }

    #[test]
    fn test_mental_rewards_clean_play() {
        let clean = rate(StatEntry {
            attack_attempts: 60,
            serve_attempts: 30,
            pass_attempts: 30,
            ..Default::default()
        });
        let baseline = calculate_sub_ratings(&AggregatedStats::default());
        assert!(clean.mental > baseline.mental);
    }

    #[test]
    fn test_physique_scales_with_workload() {
        let idle = rate(StatEntry::default());
        assert_eq!(idle.physique, 50);

        let busy = rate(StatEntry {
            serve_attempts: 10,
            attack_attempts: 10,
            digs: 10,
            ..Default::default()
        });
        assert_eq!(busy.physique, 99);
    }

    #[test]
    fn test_ratings_stay_in_range_for_extreme_lines() {
        let lines = [
            StatEntry::default(),
            dominant_entry(),
            StatEntry {
                attack_kills: 10_000,
                attack_attempts: 10_000,
                service_aces: 5_000,
                serve_attempts: 5_000,
                pass_attempts: 5_000,
                pass_sum: 15_000,
                set_attempts: 5_000,
                set_sum: 15_000,
                digs: 10_000,
                block_solos: 10_000,
                ..Default::default()
            },
            StatEntry {
                attack_errors: 10_000,
                attack_attempts: 10_000,
                service_errors: 5_000,
                serve_attempts: 5_000,
                setting_errors: 5_000,
                set_attempts: 5_000,
                ball_handling_errors: 5_000,
                pass_attempts: 5_000,
                ..Default::default()
            },
        ];

        for line in lines {
            assert_in_range(&rate(line));
        }
    }

    #[test]
    fn test_counts_near_u32_max_do_not_overflow() {
        let huge = StatEntry {
            attack_kills: u32::MAX,
            attack_errors: u32::MAX,
            attack_attempts: u32::MAX,
            service_errors: u32::MAX,
            serve_attempts: u32::MAX,
            ball_handling_errors: u32::MAX,
            pass_attempts: u32::MAX,
            digs: 3_000_000_000,
            block_solos: u32::MAX,
            block_assists: u32::MAX,
            ..Default::default()
        };
        assert_in_range(&rate(huge.clone()));

        let stats = aggregate_entries([&huge, &huge]);
        assert_eq!(stats.digs, 6_000_000_000);
        assert_eq!(stats.total_errors(), 6 * u64::from(u32::MAX));
        assert_in_range(&calculate_sub_ratings(&stats));
    }
}
