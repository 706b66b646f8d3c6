use crate::fighter::Fighter;
use crate::matchmaking::PairHistory;
use crate::rating::clamp_streak;
use chrono::NaiveDate;
use std::collections::HashSet;

pub const REMATCH_COOLDOWN_DAYS: i64 = 210;

/// Score returned for a pair that fought inside the cooldown window.
pub const DISQUALIFIED_SCORE: f64 = -9999.0;

/// Desirability of booking `a` against `b`; higher is better.
pub fn score_pair(
    a: &Fighter,
    b: &Fighter,
    is_title_fight: bool,
    pair_last_fought: Option<NaiveDate>,
    event_date: NaiveDate,
    cooldown_days: i64,
) -> f64 {
    if let Some(last) = pair_last_fought {
        if (event_date - last).num_days() < cooldown_days {
            return DISQUALIFIED_SCORE;
        }
    }

    let mut score = 1000.0 - (a.rating - b.rating).abs();

    if let (Some(ra), Some(rb)) = (a.rank_slot(), b.rank_slot()) {
        score += 120.0 - 20.0 * (ra as f64 - rb as f64).abs();
        if ra <= 5 && rb <= 5 {
            score += 40.0;
        }
    }

    score += 10.0 * clamp_streak(a.streak) as f64;
    score += 10.0 * clamp_streak(b.streak) as f64;

    if is_title_fight {
        score *= 2.0;
    }

    score
}

/// Highest scoring legal opponent for `a`.
///
/// Candidates equal to `a`, already used, or inside the rematch cooldown are
/// never returned. Ties keep the first maximum in iteration order.
pub fn pick_best_opponent<'a>(
    a: &Fighter,
    candidates: &[&'a Fighter],
    used_ids: &HashSet<u32>,
    pair_history: &PairHistory,
    event_date: NaiveDate,
    is_title_fight: bool,
) -> Option<&'a Fighter> {
    let mut best: Option<(&'a Fighter, f64)> = None;

    for &b in candidates {
        if b.id == a.id || used_ids.contains(&b.id) {
            continue;
        }

        let last = pair_history.last_fought(a.id, b.id);
        let score = score_pair(a, b, is_title_fight, last, event_date, REMATCH_COOLDOWN_DAYS);
        if score <= DISQUALIFIED_SCORE {
            continue;
        }

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((b, score)),
        }
    }

    best.map(|(fighter, _)| fighter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::FighterRank;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fighter(id: u32, rating: f64, rank: FighterRank, streak: i32) -> Fighter {
        Fighter::builder()
            .id(id)
            .name(format!("Fighter {}", id))
            .rating(rating)
            .rank(rank)
            .streak(streak)
            .build()
            .unwrap()
    }

    #[test]
    fn test_score_pair_components() {
        let event = date(2026, 6, 6);
        let a = fighter(1, 1600.0, FighterRank::Ranked(2), 2);
        let b = fighter(2, 1550.0, FighterRank::Ranked(4), -5);

        // 1000 - 50 + (120 - 40) + 40 + 20 - 30
        let score = score_pair(&a, &b, false, None, event, REMATCH_COOLDOWN_DAYS);
        assert!((score - 1060.0).abs() < 1e-9, "score was {}", score);

        let title = score_pair(&a, &b, true, None, event, REMATCH_COOLDOWN_DAYS);
        assert!((title - 2120.0).abs() < 1e-9);
    }

    #[test]
    fn test_champion_gets_no_rank_bonus() {
        let event = date(2026, 6, 6);
        let champ = fighter(1, 1700.0, FighterRank::Champion, 0);
        let contender = fighter(2, 1700.0, FighterRank::Ranked(1), 0);

        let score = score_pair(&champ, &contender, false, None, event, REMATCH_COOLDOWN_DAYS);
        assert!((score - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_rematch_inside_cooldown_is_disqualified() {
        let event = date(2026, 6, 6);
        let a = fighter(1, 1500.0, FighterRank::Unranked, 0);
        let b = fighter(2, 1500.0, FighterRank::Unranked, 0);

        let recent = event - Duration::days(100);
        assert_eq!(
            score_pair(&a, &b, false, Some(recent), event, REMATCH_COOLDOWN_DAYS),
            DISQUALIFIED_SCORE
        );

        let old = event - Duration::days(REMATCH_COOLDOWN_DAYS);
        assert!(score_pair(&a, &b, false, Some(old), event, REMATCH_COOLDOWN_DAYS) > 0.0);
    }

    #[test]
    fn test_pick_best_opponent_skips_self_used_and_cooldown() {
        let event = date(2026, 6, 6);
        let a = fighter(1, 1500.0, FighterRank::Unranked, 0);
        let closest = fighter(2, 1505.0, FighterRank::Unranked, 0);
        let used = fighter(3, 1500.0, FighterRank::Unranked, 0);
        let far = fighter(4, 1650.0, FighterRank::Unranked, 0);

        let mut history = PairHistory::new();
        history.record(1, 2, event - Duration::days(30));

        let used_ids: HashSet<u32> = [3].into_iter().collect();
        let candidates = vec![&a, &closest, &used, &far];

        let picked = pick_best_opponent(&a, &candidates, &used_ids, &history, event, false);
        assert_eq!(picked.map(|f| f.id), Some(4));
    }

    #[test]
    fn test_pick_best_opponent_none_when_no_legal_candidate() {
        let event = date(2026, 6, 6);
        let a = fighter(1, 1500.0, FighterRank::Unranked, 0);
        let b = fighter(2, 1500.0, FighterRank::Unranked, 0);

        let mut history = PairHistory::new();
        history.record(1, 2, event - Duration::days(7));

        let picked = pick_best_opponent(&a, &[&b], &HashSet::new(), &history, event, false);
        assert!(picked.is_none());
        assert!(pick_best_opponent(&a, &[], &HashSet::new(), &history, event, false).is_none());
    }

    #[test]
    fn test_pick_best_opponent_keeps_first_maximum() {
        let event = date(2026, 6, 6);
        let a = fighter(1, 1500.0, FighterRank::Unranked, 0);
        let first = fighter(2, 1520.0, FighterRank::Unranked, 0);
        let second = fighter(3, 1480.0, FighterRank::Unranked, 0);

        let picked = pick_best_opponent(&a, &[&first, &second], &HashSet::new(), &PairHistory::new(), event, false);
        assert_eq!(picked.map(|f| f.id), Some(2));

        let picked = pick_best_opponent(&a, &[&second, &first], &HashSet::new(), &PairHistory::new(), event, false);
        assert_eq!(picked.map(|f| f.id), Some(3));
    }
}
