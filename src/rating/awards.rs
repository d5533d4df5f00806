use std::cmp::{Ordering, Reverse};

use log::warn;

use crate::config::AwardSettings;
use crate::domain::StatEntry;

use super::aggregation::ratio;
use super::types::{Award, AwardType};

/// Pick the per-category award winners for one event's stat lines
pub fn calculate_awards(entries: &[StatEntry], settings: &AwardSettings) -> Vec<Award> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };
    let event_id = first.event_id;

    let lines: Vec<&StatEntry> = entries
        .iter()
        .filter(|e| {
            let same_event = e.event_id == event_id;
            if !same_event {
                warn!(
                    "Ignoring stat line of player {} for event {} while awarding event {}",
                    e.player_id, e.event_id, event_id
                );
            }
            same_event
        })
        .collect();

    let award = |award_type: AwardType, (entry, value): (&StatEntry, f64)| Award {
        event_id,
        award_type,
        player_id: entry.player_id,
        value,
    };

    let mut awards = Vec::new();

    if let Some((entry, score)) = pick_winner(lines.iter().map(|&e| (e, mvp_score(e)))) {
        awards.push(award(AwardType::Mvp, (entry, round_one_decimal(score))));
    }

    let attackers = lines
        .iter()
        .filter(|e| e.attack_attempts >= settings.min_attack_attempts)
        .map(|&e| (e, kill_pct(e)));
    if let Some((entry, pct)) = pick_winner(attackers) {
        awards.push(award(AwardType::TopAttacker, (entry, round_one_decimal(pct * 100.0))));
    }

    let servers = lines
        .iter()
        .filter(|e| e.service_aces > 0)
        .map(|&e| (e, (e.service_aces, Reverse(e.service_errors))));
    if let Some((entry, (aces, _))) = pick_winner(servers) {
        awards.push(award(AwardType::TopServer, (entry, aces as f64)));
    }

    let defenders = lines
        .iter()
        .map(|&e| (e, defensive_total(e)))
        .filter(|(_, total)| *total > 0);
    if let Some((entry, total)) = pick_winner(defenders) {
        awards.push(award(AwardType::TopDefender, (entry, total as f64)));
    }

    let passers = lines
        .iter()
        .filter(|e| e.pass_attempts >= settings.min_pass_attempts)
        .map(|&e| (e, ratio(e.pass_sum as f64, u64::from(e.pass_attempts))));
    if let Some((entry, rating)) = pick_winner(passers) {
        awards.push(award(AwardType::TopPasser, (entry, round_one_decimal(rating))));
    }

    awards
}

pub fn mvp_score(entry: &StatEntry) -> f64 {
    let blocks = entry.block_solos as f64 + 0.5 * entry.block_assists as f64;
    let errors = entry.attack_errors as f64 + entry.service_errors as f64;
    entry.attack_kills as f64 * 2.0 + entry.service_aces as f64 * 3.0 + entry.digs as f64 + blocks * 2.0
        - errors * 1.5
}

fn kill_pct(entry: &StatEntry) -> f64 {
    ratio(
        entry.attack_kills as f64 - entry.attack_errors as f64,
        u64::from(entry.attack_attempts),
    )
}

fn defensive_total(entry: &StatEntry) -> u64 {
    u64::from(entry.digs) + u64::from(entry.block_solos) + u64::from(entry.block_assists)
}

/// Highest key wins; equal keys go to the lower player id
fn pick_winner<'a, K, I>(candidates: I) -> Option<(&'a StatEntry, K)>
where
    K: PartialOrd,
    I: IntoIterator<Item = (&'a StatEntry, K)>,
{
    let mut best: Option<(&'a StatEntry, K)> = None;
    for (entry, key) in candidates {
        let replace = match &best {
            None => true,
            Some((current, current_key)) => match key.partial_cmp(current_key) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => entry.player_id < current.player_id,
                _ => false,
            },
        };
        if replace {
            best = Some((entry, key));
        }
    }
    best
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
