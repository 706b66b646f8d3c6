use crate::error::SimulationResult;
use crate::event::{CardSlot, Event, Fight, NewsService};
use crate::fighter::Fighter;
use crate::matchmaking::{PairKey, pick_best_opponent};
use crate::planner::{PlanningContext, already_scheduled_title, booked_ids_and_pairs, event_used_ids};
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

const CO_MAIN_TITLE_CHANCE: f64 = 0.22;

const TITLE_POOL: usize = 5;
const TITLE_POOL_PREFERRED: usize = 3;
const FEATURED_POOL: usize = 8;

const MAIN_EVENT_LABEL: &str = "Main event announced";
const CO_MAIN_LABEL: &str = "Co-main event announced";

impl<'a> PlanningContext<'a> {
    /// Books the headline bout, and a co-main for numbered events.
    pub fn plan_main_event<R: Rng + ?Sized>(&mut self, event: &mut Event, rng: &mut R) -> SimulationResult<()> {
        let names = self.division_names();
        let Some(&main_division) = names.choose(rng) else {
            return Ok(());
        };

        let venue = NewsService::venue(&event.display_name());
        event.note(venue);

        let title_chance = event.kind.title_fight_chance();
        self.plan_featured_bout(event, main_division, title_chance, CardSlot::MainEvent, rng)?;

        if event.kind.has_co_main() {
            let remaining: Vec<&str> = names.iter().copied().filter(|name| *name != main_division).collect();
            let co_division = remaining.choose(rng).copied().unwrap_or(main_division);

            self.plan_featured_bout(event, co_division, CO_MAIN_TITLE_CHANCE, CardSlot::CoMain, rng)?;
        }

        Ok(())
    }

    /// Tries a title fight first, then the best ranked pairing among the top
    /// eight. Returns whether a bout was booked.
    pub fn plan_featured_bout<R: Rng + ?Sized>(
        &mut self,
        event: &mut Event,
        division_name: &str,
        title_chance: f64,
        slot: CardSlot,
        rng: &mut R,
    ) -> SimulationResult<bool> {
        let division = self.division(division_name)?;
        let event_date = event.date;
        let is_main_event = slot == CardSlot::MainEvent;

        let (mut booked_ids, booked_pairs) = booked_ids_and_pairs(self.fights, division_name, event.id);
        booked_ids.extend(event_used_ids(self.fights, event.id, division_name));

        let ranked: Vec<&Fighter> = division
            .available_ranked(event_date)
            .into_iter()
            .filter(|f| !booked_ids.contains(&f.id))
            .collect();

        if let Some(champion) = division.champion() {
            let wants_title = champion.is_available(event_date)
                && rng.gen_range(0.0..1.0) < title_chance
                && !already_scheduled_title(self.fights, division_name, champion.id)
                && !booked_ids.contains(&champion.id)
                && self.save.title_fight_due(event_date, self.config.title_fight_gap_days);

            if wants_title {
                let pool = &ranked[..ranked.len().min(TITLE_POOL)];
                let preferred = &pool[..pool.len().min(TITLE_POOL_PREFERRED)];
                let used = HashSet::from([champion.id]);

                let challenger = pick_best_opponent(champion, preferred, &used, &division.pair_history, event_date, true)
                    .or_else(|| pick_best_opponent(champion, pool, &used, &division.pair_history, event_date, true));

                if let Some(challenger) = challenger {
                    let fight = Fight::scheduled(0, event.id, division_name, champion.id, challenger.id)
                        .top15(true)
                        .featured(slot, is_main_event, true);

                    let Some(fight_id) = self.book(event, fight) else {
                        return Ok(false);
                    };

                    if is_main_event {
                        event.main_fight_id = Some(fight_id);
                    }

                    info!(
                        "🏆 title fight booked for {} ({}): {} vs {}",
                        event.display_name(),
                        division_name,
                        champion.name,
                        challenger.name
                    );
                    event.note(NewsService::title_fight_announced(division_name, &champion.name, &challenger.name));

                    return Ok(true);
                }

                debug!("no title challenger available in {}", division_name);
            }
        }

        let pool = &ranked[..ranked.len().min(FEATURED_POOL)];

        let mut best: Option<(&Fighter, &Fighter)> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (a, b) in pool.iter().copied().tuple_combinations() {
            if booked_pairs.contains(&PairKey::new(a.id, b.id)) {
                continue;
            }
            if division
                .pair_history
                .in_cooldown(a.id, b.id, event_date, self.config.rematch_cooldown_days)
            {
                continue;
            }

            let score = featured_pair_score(a, b);
            if score > best_score {
                best_score = score;
                best = Some((a, b));
            }
        }

        if best.is_none() && pool.len() >= 2 {
            best = Some((pool[0], pool[1]));
        }

        let Some((a, b)) = best else {
            debug!("not enough ranked fighters in {} for a featured bout", division_name);
            return Ok(false);
        };

        let fight = Fight::scheduled(0, event.id, division_name, a.id, b.id)
            .top15(true)
            .featured(slot, is_main_event, false);

        let Some(fight_id) = self.book(event, fight) else {
            return Ok(false);
        };

        if is_main_event {
            event.main_fight_id = Some(fight_id);
        }

        let label = if is_main_event { MAIN_EVENT_LABEL } else { CO_MAIN_LABEL };
        info!("📣 {} for {} ({}): {} vs {}", label, event.display_name(), division_name, a.name, b.name);
        event.note(NewsService::featured_announced(label, division_name, &a.name, &b.name));

        Ok(true)
    }
}

/// Rating closeness plus rank closeness, for two ranked fighters.
fn featured_pair_score(a: &Fighter, b: &Fighter) -> f64 {
    let rank_a = a.rank_slot().unwrap_or(0) as f64;
    let rank_b = b.rank_slot().unwrap_or(0) as f64;

    1000.0 - (a.rating - b.rating).abs() + 120.0 - 20.0 * (rank_a - rank_b).abs()
}
