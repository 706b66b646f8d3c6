use crate::calendar::PlanConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::event::{FightResult, NewsService};
use crate::fighter::{Fighter, FighterRank};
use crate::planner::PlanningContext;
use crate::ranking::RankingManager;
use crate::simulation::{FightSimulator, SimConfig, random_method_and_time};
use crate::world::WorldState;
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventRunResult {
    pub event_id: u32,
    pub completed_bouts: usize,
    pub cancelled_bouts: usize,
    pub title_changes: Vec<(String, u32)>,
}

pub struct EventRunner;

impl EventRunner {
    /// Runs the event dated exactly `today`. Returns `None` when there is no
    /// such event or it already ran.
    pub fn run_event<R: Rng + ?Sized>(
        world: &mut WorldState,
        today: NaiveDate,
        sim_config: &SimConfig,
        plan_config: &PlanConfig,
        rng: &mut R,
    ) -> SimulationResult<Option<EventRunResult>> {
        let WorldState {
            divisions,
            events,
            fights,
            save,
        } = world;

        let Some(event) = events.iter_mut().find(|e| e.date == today) else {
            return Ok(None);
        };

        if event.completed {
            return Ok(None);
        }

        if !event.is_card_generated() {
            debug!("card of event {} was never generated, filling it on fight day", event.id);
            let mut ctx = PlanningContext::new(divisions, fights, save, plan_config);
            ctx.fill_full_card(event, rng)?;
            event.mark_card_generated(today);
        }

        {
            let mut ctx = PlanningContext::new(divisions, fights, save, plan_config);
            ctx.process_withdrawals(event, sim_config, rng)?;
        }

        let mut card: Vec<usize> = fights
            .iter()
            .enumerate()
            .filter(|(_, f)| f.event_id == event.id && f.is_scheduled())
            .map(|(idx, _)| idx)
            .collect();
        card.sort_by_key(|&idx| !fights[idx].is_main_event);

        let champions_before: HashMap<String, u32> = divisions
            .iter()
            .filter_map(|(name, division)| division.champion().map(|c| (name.clone(), c.id)))
            .collect();

        let mut result = EventRunResult {
            event_id: event.id,
            ..EventRunResult::default()
        };

        info!("🥊 {} is underway with {} bouts", event.display_name(), card.len());

        for idx in card {
            let fight = &mut fights[idx];

            if fight.is_self_bout() {
                fight.cancel();
                event.note(NewsService::self_bout_cancelled());
                result.cancelled_bouts += 1;
                continue;
            }

            let division = divisions
                .get_mut(&fight.division)
                .ok_or_else(|| SimulationError::DivisionNotFound(fight.division.clone()))?;

            let outcome = {
                let a = division.find(fight.a_id)?;
                let b = division.find(fight.b_id)?;
                FightSimulator::simulate(a, b, today, sim_config, rng)
            };
            let finish = random_method_and_time(rng);

            fight.complete(FightResult {
                winner_id: outcome.winner_id,
                method: finish.method.clone(),
                round: finish.round,
                time: finish.time.clone(),
            });

            let a_won = outcome.a_won(fight.a_id);

            let a = division.find_mut(fight.a_id)?;
            Self::apply_result(a, outcome.rating_a, a_won, outcome.next_available_a, today);
            let a_name = a.name.clone();

            let b = division.find_mut(fight.b_id)?;
            Self::apply_result(b, outcome.rating_b, !a_won, outcome.next_available_b, today);
            let b_name = b.name.clone();

            let (winner_name, loser_name) = if a_won { (&a_name, &b_name) } else { (&b_name, &a_name) };

            info!(
                "✅ {} def. {} by {} (R{} {})",
                winner_name, loser_name, finish.method, finish.round, finish.time
            );
            event.note(NewsService::result(
                winner_name,
                loser_name,
                &finish.method,
                finish.round,
                &finish.time,
            ));

            if outcome.injury_days_a > 0 {
                event.note(NewsService::injury(&a_name, outcome.injury_days_a));
            }
            if outcome.injury_days_b > 0 {
                event.note(NewsService::injury(&b_name, outcome.injury_days_b));
            }

            division.pair_history.record(fight.a_id, fight.b_id, today);

            if fight.is_title_fight {
                save.last_title_fight_date = Some(today);

                match champions_before.get(&fight.division) {
                    Some(&before) if before != outcome.winner_id => {
                        division.find_mut(before)?.rank = FighterRank::Unranked;
                        division.find_mut(outcome.winner_id)?.rank = FighterRank::Champion;

                        info!("🏆 new {} champion: {}", fight.division, winner_name);
                        event.note(NewsService::title_change(winner_name));
                        result.title_changes.push((fight.division.clone(), outcome.winner_id));
                    }
                    _ => event.note(NewsService::title_defended(winner_name)),
                }
            }

            result.completed_bouts += 1;
        }

        for (name, division) in divisions.iter_mut() {
            RankingManager::recompute_top15(&mut division.fighters);
            for fighter in division.fighters.iter_mut() {
                fighter.push_rank_point(today);
            }
            debug!("rankings recomputed for {}", name);
        }

        event.completed = true;

        info!(
            "🏁 {} finished: {} bouts completed, {} cancelled",
            event.display_name(),
            result.completed_bouts,
            result.cancelled_bouts
        );

        Ok(Some(result))
    }

    fn apply_result(fighter: &mut Fighter, rating: f64, won: bool, next_available: NaiveDate, today: NaiveDate) {
        fighter.rating = rating;
        if won {
            fighter.register_win();
        } else {
            fighter.register_loss();
        }
        fighter.next_available_date = Some(next_available);
        fighter.last_fight_date = Some(today);
        fighter.push_rating_point(today);
    }
}
