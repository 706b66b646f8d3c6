use crate::division::Division;
use crate::error::{SimulationError, SimulationResult};
use crate::event::{CardSlot, Event, EventKind, Fight, NewsService};
use crate::fighter::Fighter;
use crate::matchmaking::{PairKey, pick_best_opponent};
use crate::planner::{PlanningContext, booked_ids_and_pairs, event_top_tier_count};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

const MAIN_CARD_RANGE: std::ops::RangeInclusive<usize> = 6..=7;
const PRELIMS_RANGE: std::ops::RangeInclusive<usize> = 8..=12;
const CARD_SIZE_RANGE: std::ops::RangeInclusive<usize> = 16..=20;

const SEEDED_DIVISIONS: usize = 3;
const SEEDED_BOUTS: usize = 2;

const RANKED_RANK_GAP: u8 = 6;
const UNRANKED_RATING_GAP: f64 = 120.0;
const HOT_STREAK: i32 = 4;
const HOT_STREAK_CHANCE: f64 = 0.06;

/// How many non-featured bouts go on the main card and the prelims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPlan {
    pub main_card: usize,
    pub prelims: usize,
}

impl CardPlan {
    pub fn total(&self) -> usize {
        self.main_card + self.prelims
    }
}

/// Random card shape whose size, featured bouts included, lands in 16..=20.
pub fn pick_card_plan<R: Rng + ?Sized>(kind: EventKind, rng: &mut R) -> CardPlan {
    let featured = if kind.has_co_main() { 2 } else { 1 };

    let options: Vec<CardPlan> = MAIN_CARD_RANGE
        .flat_map(|main_card| PRELIMS_RANGE.map(move |prelims| CardPlan { main_card, prelims }))
        .filter(|plan| CARD_SIZE_RANGE.contains(&(plan.total() + featured)))
        .collect();

    options.choose(rng).copied().unwrap_or(CardPlan {
        main_card: 6,
        prelims: 9,
    })
}

/// Spreads `total` bouts over the divisions: up to three random divisions
/// are seeded with two bouts, the rest is handed out one at a time to
/// divisions still below the per-division cap.
pub fn division_targets<'n, R: Rng + ?Sized>(
    names: &[&'n str],
    existing: &HashMap<&str, usize>,
    total: usize,
    rng: &mut R,
) -> BTreeMap<&'n str, usize> {
    let cap = if names.len() < 3 {
        total
    } else {
        ((total as f64 * 0.4) as usize).clamp(4, 6)
    };

    let seeds: Vec<&'n str> = names
        .choose_multiple(rng, names.len().min(SEEDED_DIVISIONS))
        .copied()
        .collect();

    let mut targets: BTreeMap<&'n str, usize> = names
        .iter()
        .map(|&name| (name, existing.get(name).copied().unwrap_or(0)))
        .collect();

    let mut remaining = total as i64 - existing.values().sum::<usize>() as i64;

    for seed in seeds {
        let current = targets.get(seed).copied().unwrap_or(0);
        let need = SEEDED_BOUTS.saturating_sub(current) as i64;
        let add = need.min(remaining).max(0);
        targets.insert(seed, current + add as usize);
        remaining -= add;
    }

    while remaining > 0 {
        let candidates: Vec<&'n str> = names
            .iter()
            .copied()
            .filter(|name| targets.get(*name).copied().unwrap_or(0) < cap)
            .collect();

        let Some(&name) = candidates.choose(rng) else {
            break;
        };

        *targets.entry(name).or_insert(0) += 1;
        remaining -= 1;
    }

    targets
}

/// Places every unslotted bout of the event: the best ranked pairings by
/// average rating headline the main card, unranked pairings and leftovers
/// go to the prelims.
pub fn assign_card_slots(
    fights: &mut [Fight],
    divisions: &BTreeMap<String, Division>,
    event_id: u32,
    plan: CardPlan,
) -> SimulationResult<()> {
    let mut ranked: Vec<(f64, usize)> = Vec::new();
    let mut unranked: Vec<(f64, usize)> = Vec::new();

    for (idx, fight) in fights.iter().enumerate() {
        if fight.event_id != event_id || fight.card_slot.is_some() {
            continue;
        }

        let division = divisions
            .get(&fight.division)
            .ok_or_else(|| SimulationError::DivisionNotFound(fight.division.clone()))?;

        let average = division.average_rating(fight.a_id, fight.b_id)?;
        if division.is_ranked_pairing(fight.a_id, fight.b_id)? {
            ranked.push((average, idx));
        } else {
            unranked.push((average, idx));
        }
    }

    let by_rating_desc = |x: &(f64, usize), y: &(f64, usize)| y.0.partial_cmp(&x.0).unwrap_or(Ordering::Equal);
    ranked.sort_by(by_rating_desc);
    unranked.sort_by(by_rating_desc);

    let main_slots = plan.main_card.min(ranked.len());
    for &(_, idx) in &ranked[..main_slots] {
        fights[idx].card_slot = Some(CardSlot::MainCard);
    }

    for &(_, idx) in &unranked {
        fights[idx].card_slot = Some(CardSlot::Prelims);
    }

    let mut open_prelims = plan.prelims.saturating_sub(unranked.len());
    for &(_, idx) in &ranked[main_slots..] {
        if open_prelims == 0 {
            break;
        }
        fights[idx].card_slot = Some(CardSlot::Prelims);
        open_prelims -= 1;
    }

    for fight in fights.iter_mut().filter(|f| f.event_id == event_id && f.card_slot.is_none()) {
        fight.card_slot = Some(CardSlot::Prelims);
    }

    Ok(())
}

fn open_pair(a: &Fighter, b: &Fighter, booked_pairs: &HashSet<PairKey>, event_pairs: &HashSet<PairKey>) -> bool {
    let key = PairKey::new(a.id, b.id);
    !booked_pairs.contains(&key) && !event_pairs.contains(&key)
}

fn rank_gap(a: &Fighter, b: &Fighter) -> u8 {
    a.rank_slot().unwrap_or(0).abs_diff(b.rank_slot().unwrap_or(0))
}

fn is_top_tier_pair(a: &Fighter, b: &Fighter) -> bool {
    a.rank.is_top_tier() && b.rank.is_top_tier()
}

/// Theme-country fighters first, then by rating, best first.
fn sort_pool(pool: &mut [&Fighter], theme: Option<&str>) {
    let boosted = |f: &Fighter| theme.is_some_and(|t| f.country.trim() == t);

    pool.sort_by(|x, y| {
        boosted(*y)
            .cmp(&boosted(*x))
            .then_with(|| y.rating.partial_cmp(&x.rating).unwrap_or(Ordering::Equal))
    });
}

/// One roll per division lets a hot-streak fighter look past the rank gap.
fn rolls_hot_streak<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_range(0.0..1.0) < HOT_STREAK_CHANCE
}

/// Opponents close enough to `a`: within six rank slots for ranked bouts,
/// within 120 rating points for unranked ones. A loosened search drops the
/// rank gap for a fighter on a hot streak.
fn preferred_opponents<'f>(
    a: &Fighter,
    pool: &[&'f Fighter],
    ranked: bool,
    loosened: bool,
    booked_pairs: &HashSet<PairKey>,
    event_pairs: &HashSet<PairKey>,
) -> Vec<&'f Fighter> {
    let hot = loosened && a.streak >= HOT_STREAK;

    pool.iter()
        .copied()
        .filter(|b| {
            if !ranked {
                (a.rating - b.rating).abs() <= UNRANKED_RATING_GAP
            } else {
                hot || rank_gap(a, b) <= RANKED_RANK_GAP
            }
        })
        .filter(|b| open_pair(a, b, booked_pairs, event_pairs))
        .collect()
}

/// Candidate opponents for `a` out of `pool`: the preferred subset when it
/// is not empty, otherwise the whole pool, never a pair that is already
/// booked.
fn fallback_pool<'f>(
    a: &Fighter,
    preferred: Vec<&'f Fighter>,
    pool: &[&'f Fighter],
    booked_pairs: &HashSet<PairKey>,
    event_pairs: &HashSet<PairKey>,
) -> Vec<&'f Fighter> {
    let source: &[&'f Fighter] = if preferred.is_empty() { pool } else { &preferred };

    source
        .iter()
        .copied()
        .filter(|b| open_pair(a, b, booked_pairs, event_pairs))
        .collect()
}

impl<'a> PlanningContext<'a> {
    /// Fills the rest of the card across all divisions and assigns every
    /// bout a card slot. Returns how many bouts were added.
    pub fn fill_full_card<R: Rng + ?Sized>(&mut self, event: &mut Event, rng: &mut R) -> SimulationResult<usize> {
        let divisions = self.divisions;
        let names = self.division_names();
        if names.is_empty() {
            return Ok(0);
        }

        let event_id = event.id;
        let event_date = event.date;
        let theme = event
            .theme_country
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let plan = pick_card_plan(event.kind, rng);

        let mut existing_counts: HashMap<&str, usize> = HashMap::new();
        let mut existing_top: HashMap<&str, usize> = HashMap::new();
        for fight in self.fights.iter().filter(|f| f.event_id == event_id && !f.is_featured()) {
            let (name, division) = divisions
                .get_key_value(fight.division.as_str())
                .ok_or_else(|| SimulationError::DivisionNotFound(fight.division.clone()))?;

            *existing_counts.entry(name.as_str()).or_insert(0) += 1;
            if division.is_ranked_pairing(fight.a_id, fight.b_id)? {
                *existing_top.entry(name.as_str()).or_insert(0) += 1;
            }
        }

        let targets = division_targets(&names, &existing_counts, plan.total(), rng);

        let existing_top_total: usize = existing_top.values().sum();
        let mut remaining_top = plan.main_card.max(existing_top_total) - existing_top_total;
        let mut top_targets: HashMap<&str, usize> = names
            .iter()
            .map(|&name| (name, existing_top.get(name).copied().unwrap_or(0)))
            .collect();

        while remaining_top > 0 {
            let candidates: Vec<&str> = names
                .iter()
                .copied()
                .filter(|name| top_targets.get(*name).copied().unwrap_or(0) < targets.get(*name).copied().unwrap_or(0))
                .collect();

            let Some(&name) = candidates.choose(rng) else {
                break;
            };

            *top_targets.entry(name).or_insert(0) += 1;
            remaining_top -= 1;
        }

        let top_probability = event.kind.top_fight_chance();
        let top_tier_limit = self.config.top_tier_bout_limit;
        let mut top_tier_count = event_top_tier_count(self.fights, divisions, event_id)?;
        let mut added = 0;

        for &name in &names {
            let division = self.division(name)?;

            let (booked_ids, booked_pairs) = booked_ids_and_pairs(self.fights, name, event_id);
            let mut used = booked_ids;
            let mut event_pairs: HashSet<PairKey> = HashSet::new();
            let mut top_existing = 0;
            let mut unranked_existing = 0;

            for fight in self.fights.iter().filter(|f| f.event_id == event_id && f.division == name) {
                used.insert(fight.a_id);
                used.insert(fight.b_id);
                event_pairs.insert(PairKey::new(fight.a_id, fight.b_id));

                if !fight.is_featured() && fight.is_scheduled() {
                    if fight.is_top15 {
                        top_existing += 1;
                    } else {
                        unranked_existing += 1;
                    }
                }
            }

            let target_total = targets
                .get(name)
                .copied()
                .unwrap_or(top_existing + unranked_existing);
            let top_target = top_targets.get(name).copied().unwrap_or(0).min(target_total);
            let unranked_target = target_total.saturating_sub(top_target);
            let mut top_needed = top_target.saturating_sub(top_existing);
            let mut unranked_needed = unranked_target.saturating_sub(unranked_existing);

            let mut top_pool: Vec<&Fighter> = division
                .fighters
                .iter()
                .filter(|f| f.is_ranked() && f.is_available(event_date) && !used.contains(&f.id))
                .collect();
            let mut unranked_pool: Vec<&Fighter> = division
                .fighters
                .iter()
                .filter(|f| f.is_unranked() && f.is_available(event_date) && !used.contains(&f.id))
                .collect();

            sort_pool(&mut top_pool, theme.as_deref());
            sort_pool(&mut unranked_pool, theme.as_deref());

            let allow_special = rolls_hot_streak(rng);

            while top_needed > 0 && top_pool.len() >= 2 {
                let a = top_pool.remove(0);

                let preferred = preferred_opponents(a, &top_pool, true, allow_special, &booked_pairs, &event_pairs);

                let mut candidates = fallback_pool(a, preferred, &top_pool, &booked_pairs, &event_pairs);
                if top_tier_count >= top_tier_limit {
                    candidates.retain(|b| !is_top_tier_pair(a, b));
                }

                let Some(b) = pick_best_opponent(a, &candidates, &used, &division.pair_history, event_date, false) else {
                    continue;
                };

                top_pool.retain(|x| x.id != b.id);
                used.insert(a.id);
                used.insert(b.id);
                event_pairs.insert(PairKey::new(a.id, b.id));

                let fight = Fight::scheduled(0, event_id, name, a.id, b.id).top15(true);
                if self.book(event, fight).is_some() {
                    added += 1;
                    top_needed -= 1;
                    if is_top_tier_pair(a, b) {
                        top_tier_count += 1;
                    }
                }
            }

            while unranked_needed > 0 && unranked_pool.len() >= 2 {
                let a = unranked_pool.remove(0);

                let preferred = preferred_opponents(a, &unranked_pool, false, false, &booked_pairs, &event_pairs);

                let candidates = fallback_pool(a, preferred, &unranked_pool, &booked_pairs, &event_pairs);

                let Some(b) = pick_best_opponent(a, &candidates, &used, &division.pair_history, event_date, false) else {
                    break;
                };

                unranked_pool.retain(|x| x.id != b.id);
                used.insert(a.id);
                used.insert(b.id);
                event_pairs.insert(PairKey::new(a.id, b.id));

                let fight = Fight::scheduled(0, event_id, name, a.id, b.id);
                if self.book(event, fight).is_some() {
                    added += 1;
                    unranked_needed -= 1;
                }
            }

            let mut current_total = self
                .fights
                .iter()
                .filter(|f| f.event_id == event_id && f.division == name)
                .count();

            while current_total < target_total {
                let mut is_top = rng.gen_range(0.0..1.0) < top_probability && top_pool.len() >= 2;
                if !is_top && unranked_pool.len() < 2 {
                    is_top = true;
                }

                let pool = if is_top { &mut top_pool } else { &mut unranked_pool };
                if pool.len() < 2 {
                    break;
                }

                let a = pool.remove(0);

                let preferred = preferred_opponents(a, pool, is_top, false, &booked_pairs, &event_pairs);

                let mut candidates = fallback_pool(a, preferred, pool, &booked_pairs, &event_pairs);
                if is_top && top_tier_count >= top_tier_limit {
                    candidates.retain(|b| !is_top_tier_pair(a, b));
                }

                let Some(b) = pick_best_opponent(a, &candidates, &used, &division.pair_history, event_date, false) else {
                    break;
                };

                pool.retain(|x| x.id != b.id);
                used.insert(a.id);
                used.insert(b.id);
                event_pairs.insert(PairKey::new(a.id, b.id));

                let fight = Fight::scheduled(0, event_id, name, a.id, b.id).top15(is_top);
                if self.book(event, fight).is_some() {
                    added += 1;
                    current_total += 1;
                    if is_top && is_top_tier_pair(a, b) {
                        top_tier_count += 1;
                    }
                }
            }

            debug!("{}: {} bouts on the card of event {}", name, current_total, event_id);
        }

        assign_card_slots(self.fights, divisions, event_id, plan)?;
        event.note(NewsService::full_card_ready());

        info!(
            "📌 full card for {}: {} new bouts ({} main card / {} prelims planned)",
            event.display_name(),
            added,
            plan.main_card,
            plan.prelims
        );

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::PlanConfig;
    use crate::fighter::FighterRank;
    use crate::matchmaking::PairHistory;
    use crate::world::SaveConfig;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(name: &str, size: u32, id_base: u32) -> Division {
        let fighters = (0..size)
            .map(|n| {
                let rank = match n {
                    0 => FighterRank::Champion,
                    1..=15 => FighterRank::Ranked(n as u8),
                    _ => FighterRank::Unranked,
                };
                Fighter::builder()
                    .id(id_base + n)
                    .name(format!("{} {}", name, n))
                    .division(name.to_string())
                    .country(if n % 3 == 0 { String::from("Brazil") } else { String::from("USA") })
                    .rating(1800.0 - n as f64 * 12.0)
                    .rank(rank)
                    .build()
                    .unwrap()
            })
            .collect();

        Division::new(name.to_string(), fighters, PairHistory::new())
    }

    fn world() -> BTreeMap<String, Division> {
        ["Flyweight", "Bantamweight", "Featherweight", "Lightweight"]
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), roster(name, 32, (idx as u32 + 1) * 1000)))
            .collect()
    }

    #[test]
    fn test_card_plan_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            for kind in [EventKind::FightNight, EventKind::Numbered, EventKind::Country] {
                let plan = pick_card_plan(kind, &mut rng);
                let featured = if kind == EventKind::Numbered { 2 } else { 1 };
                assert!(MAIN_CARD_RANGE.contains(&plan.main_card));
                assert!(PRELIMS_RANGE.contains(&plan.prelims));
                assert!(CARD_SIZE_RANGE.contains(&(plan.total() + featured)));
            }
        }
    }

    #[test]
    fn test_division_targets_respect_cap_and_total() {
        let names = vec!["A", "B", "C", "D", "E"];
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        for _ in 0..100 {
            let targets = division_targets(&names, &HashMap::new(), 17, &mut rng);
            assert_eq!(targets.values().sum::<usize>(), 17);
            assert!(targets.values().all(|&t| t <= 6));
            assert!(targets.values().filter(|&&t| t >= 2).count() >= 3);
        }
    }

    #[test]
    fn test_division_targets_few_divisions_take_everything() {
        let names = vec!["A", "B"];
        let existing = HashMap::from([("A", 1)]);
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let targets = division_targets(&names, &existing, 15, &mut rng);
        assert_eq!(targets.values().sum::<usize>(), 15);
        assert!(targets["A"] >= 2 && targets["B"] >= 2);
    }

    #[test]
    fn test_full_card_is_legal() {
        let divisions = world();
        let mut fights = Vec::new();
        let mut save = SaveConfig::default();
        let config = PlanConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut event = Event::new(
            1,
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            EventKind::Country,
            String::from("Tokyo"),
            Some(String::from("Brazil")),
        );

        let mut ctx = PlanningContext::new(&divisions, &mut fights, &mut save, &config);
        ctx.plan_main_event(&mut event, &mut rng).unwrap();
        let added = ctx.fill_full_card(&mut event, &mut rng).unwrap();

        assert!(added > 0);
        assert!(fights.len() <= 20, "card too big: {}", fights.len());
        assert!(fights.iter().all(|f| f.card_slot.is_some()));
        assert!(fights.iter().all(|f| f.a_id != f.b_id));
        assert_eq!(fights.iter().filter(|f| f.card_slot == Some(CardSlot::MainEvent)).count(), 1);
        assert_eq!(save.next_fight_id as usize, fights.len() + 1);

        let mut seen = HashSet::new();
        for fight in &fights {
            assert!(seen.insert(fight.a_id), "fighter {} booked twice", fight.a_id);
            assert!(seen.insert(fight.b_id), "fighter {} booked twice", fight.b_id);
        }

        let top_tier = event_top_tier_count(&fights, &divisions, 1).unwrap();
        let featured_top_tier = fights
            .iter()
            .filter(|f| f.is_featured())
            .filter(|f| divisions[&f.division].is_top_tier_pairing(f.a_id, f.b_id).unwrap())
            .count();
        assert!(top_tier <= config.top_tier_bout_limit + featured_top_tier);

        assert!(event.notes.last().unwrap().text.contains("Full fight card"));
    }

    fn fighter(id: u32, rank: FighterRank, rating: f64, country: &str, streak: i32) -> Fighter {
        Fighter::builder()
            .id(id)
            .name(format!("F{}", id))
            .division(String::from("Flyweight"))
            .country(country.to_string())
            .rating(rating)
            .streak(streak)
            .rank(rank)
            .build()
            .unwrap()
    }

    fn ids(fighters: &[&Fighter]) -> Vec<u32> {
        fighters.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_theme_country_sorts_first() {
        let a = fighter(1, FighterRank::Unranked, 1700.0, "USA", 0);
        let b = fighter(2, FighterRank::Unranked, 1500.0, "Brazil", 0);
        let c = fighter(3, FighterRank::Unranked, 1600.0, " Brazil ", 0);
        let d = fighter(4, FighterRank::Unranked, 1650.0, "USA", 0);

        let mut pool = vec![&a, &b, &c, &d];
        sort_pool(&mut pool, Some("Brazil"));
        assert_eq!(ids(&pool), vec![3, 2, 1, 4]);

        sort_pool(&mut pool, None);
        assert_eq!(ids(&pool), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_ranked_opponents_stay_within_six_slots() {
        let a = fighter(1, FighterRank::Ranked(1), 1700.0, "USA", 0);
        let near = fighter(2, FighterRank::Ranked(2), 1690.0, "USA", 0);
        let edge = fighter(7, FighterRank::Ranked(7), 1640.0, "USA", 0);
        let far = fighter(8, FighterRank::Ranked(8), 1630.0, "USA", 0);
        let farther = fighter(12, FighterRank::Ranked(12), 1590.0, "USA", 0);
        let pool = vec![&near, &edge, &far, &farther];
        let none = HashSet::new();

        assert_eq!(ids(&preferred_opponents(&a, &pool, true, false, &none, &none)), vec![2, 7]);
        assert_eq!(ids(&preferred_opponents(&a, &pool, true, true, &none, &none)), vec![2, 7]);

        let booked = HashSet::from([PairKey::new(2, 1)]);
        assert_eq!(ids(&preferred_opponents(&a, &pool, true, false, &booked, &none)), vec![7]);
        assert_eq!(ids(&preferred_opponents(&a, &pool, true, false, &none, &booked)), vec![7]);
    }

    #[test]
    fn test_hot_streak_looks_past_the_rank_gap() {
        let hot = fighter(1, FighterRank::Ranked(1), 1700.0, "USA", HOT_STREAK);
        let near = fighter(2, FighterRank::Ranked(3), 1690.0, "USA", 0);
        let far = fighter(3, FighterRank::Ranked(14), 1560.0, "USA", 0);
        let pool = vec![&near, &far];
        let none = HashSet::new();

        assert_eq!(ids(&preferred_opponents(&hot, &pool, true, true, &none, &none)), vec![2, 3]);
        assert_eq!(ids(&preferred_opponents(&hot, &pool, true, false, &none, &none)), vec![2]);

        let warm = fighter(4, FighterRank::Ranked(1), 1700.0, "USA", HOT_STREAK - 1);
        assert_eq!(ids(&preferred_opponents(&warm, &pool, true, true, &none, &none)), vec![2]);
    }

    #[test]
    fn test_hot_streak_roll_is_rare() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let hits = (0..20_000).filter(|_| rolls_hot_streak(&mut rng)).count();
        assert!((900..1_500).contains(&hits), "hits: {}", hits);
    }

    #[test]
    fn test_unranked_opponents_stay_within_rating_gap() {
        let a = fighter(1, FighterRank::Unranked, 1500.0, "USA", 0);
        let above = fighter(2, FighterRank::Unranked, 1620.0, "USA", 0);
        let too_high = fighter(3, FighterRank::Unranked, 1620.5, "USA", 0);
        let below = fighter(4, FighterRank::Unranked, 1380.0, "USA", 0);
        let too_low = fighter(5, FighterRank::Unranked, 1379.0, "USA", 0);
        let pool = vec![&above, &too_high, &below, &too_low];
        let none = HashSet::new();

        assert_eq!(ids(&preferred_opponents(&a, &pool, false, true, &none, &none)), vec![2, 4]);
    }

    #[test]
    fn test_top_tier_limit_binds_on_an_elite_roster() {
        let fighters = (0..24u32)
            .map(|n| {
                let rank = match n {
                    0 => FighterRank::Champion,
                    1..=15 => FighterRank::Ranked(n as u8),
                    _ => FighterRank::Unranked,
                };
                fighter(n + 1, rank, 1800.0 - n as f64 * 12.0, "USA", 0)
            })
            .collect();
        let divisions = BTreeMap::from([(
            String::from("Flyweight"),
            Division::new(String::from("Flyweight"), fighters, PairHistory::new()),
        )]);

        let mut fights = Vec::new();
        let mut save = SaveConfig::default();
        let config = PlanConfig {
            top_tier_bout_limit: 2,
            ..PlanConfig::default()
        };
        let mut event = Event::new(
            1,
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            EventKind::FightNight,
            String::from("Apex"),
            None,
        );

        let mut ctx = PlanningContext::new(&divisions, &mut fights, &mut save, &config);
        let main = Fight::scheduled(0, 1, "Flyweight", 1, 2).featured(CardSlot::MainEvent, true, true);
        assert!(ctx.book(&mut event, main).is_some());
        assert!(ctx.fill_full_card(&mut event, &mut ChaCha8Rng::seed_from_u64(9)).unwrap() > 0);

        assert_eq!(event_top_tier_count(&fights, &divisions, 1).unwrap(), 2);
        assert!(fights.iter().filter(|f| f.is_top15).count() >= 2);
    }

    #[test]
    fn test_card_slots_rank_by_average_rating() {
        let divisions = world();
        let base = 1000;
        let mut fights = vec![
            Fight::scheduled(1, 1, "Flyweight", base + 1, base + 2).top15(true),
            Fight::scheduled(2, 1, "Flyweight", base + 9, base + 10).top15(true),
            Fight::scheduled(3, 1, "Flyweight", base + 3, base + 4).top15(true),
            Fight::scheduled(4, 1, "Flyweight", base + 20, base + 21),
        ];

        let plan = CardPlan {
            main_card: 2,
            prelims: 1,
        };
        assign_card_slots(&mut fights, &divisions, 1, plan).unwrap();

        assert_eq!(fights[0].card_slot, Some(CardSlot::MainCard));
        assert_eq!(fights[2].card_slot, Some(CardSlot::MainCard));
        assert_eq!(fights[1].card_slot, Some(CardSlot::Prelims));
        assert_eq!(fights[3].card_slot, Some(CardSlot::Prelims));
    }
}
