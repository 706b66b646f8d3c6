use crate::error::SimulationResult;
use crate::event::{Event, NewsService};
use crate::fighter::Fighter;
use crate::matchmaking::pick_best_opponent;
use crate::planner::PlanningContext;
use crate::simulation::SimConfig;
use log::{info, warn};
use rand::Rng;
use std::collections::HashSet;

const RANKED_REPLACEMENT_GAP: f64 = 180.0;
const UNRANKED_REPLACEMENT_GAP: f64 = 120.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalResult {
    pub withdrawals: usize,
    pub replacements: usize,
    pub cancellations: usize,
}

impl<'a> PlanningContext<'a> {
    /// Random late pull-outs on a card that has not been finalized yet.
    ///
    /// Once the full card is generated (or announced) the card is locked and
    /// nothing happens. Otherwise each scheduled bout loses one side with
    /// `withdrawal_chance`; a replacement from the same tier and close in
    /// rating steps in, or the bout is cancelled.
    pub fn process_withdrawals<R: Rng + ?Sized>(
        &mut self,
        event: &mut Event,
        config: &SimConfig,
        rng: &mut R,
    ) -> SimulationResult<WithdrawalResult> {
        let mut result = WithdrawalResult::default();

        if event.generated_on.is_some() || event.announced_full_on.is_some() {
            return Ok(result);
        }

        let event_id = event.id;
        let event_date = event.date;

        for name in self.division_names() {
            let division = self.division(name)?;

            let card: Vec<usize> = self
                .fights
                .iter()
                .enumerate()
                .filter(|(_, f)| f.event_id == event_id && f.division == name && f.is_scheduled())
                .map(|(idx, _)| idx)
                .collect();

            let mut used: HashSet<u32> = card
                .iter()
                .flat_map(|&idx| [self.fights[idx].a_id, self.fights[idx].b_id])
                .collect();

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

            for idx in card {
                if rng.gen_range(0.0..1.0) >= config.withdrawal_chance {
                    continue;
                }

                let (a_id, b_id, is_top) = {
                    let fight = &self.fights[idx];
                    (fight.a_id, fight.b_id, fight.is_top15)
                };

                let out_id = if rng.gen_range(0.0..1.0) < 0.5 { a_id } else { b_id };
                let stay_id = if out_id == a_id { b_id } else { a_id };

                let out_name = self.fighter_name(name, out_id);
                warn!("⚠️ {} withdrew from {}", out_name, event.display_name());
                event.note(NewsService::withdrawal(&out_name));
                result.withdrawals += 1;

                let stay = division.find(stay_id)?;
                let (pool, gap) = if is_top {
                    (&mut top_pool, RANKED_REPLACEMENT_GAP)
                } else {
                    (&mut unranked_pool, UNRANKED_REPLACEMENT_GAP)
                };

                let close: Vec<&Fighter> = pool
                    .iter()
                    .copied()
                    .filter(|p| (p.rating - stay.rating).abs() <= gap)
                    .collect();
                let candidates: &[&Fighter] = if close.is_empty() { &pool[..] } else { &close };

                let Some(replacement) =
                    pick_best_opponent(stay, candidates, &used, &division.pair_history, event_date, false)
                else {
                    self.fights[idx].cancel();
                    event.note(NewsService::cancelled(
                        &self.fighter_name(name, a_id),
                        &self.fighter_name(name, b_id),
                    ));
                    result.cancellations += 1;
                    continue;
                };

                info!("🔁 {} replaces {} ({})", replacement.name, out_name, name);
                event.note(NewsService::replacement(&out_name, &replacement.name));

                let fight = &mut self.fights[idx];
                if out_id == fight.a_id {
                    fight.a_id = replacement.id;
                } else {
                    fight.b_id = replacement.id;
                }

                used.insert(replacement.id);
                pool.retain(|p| p.id != replacement.id);
                result.replacements += 1;
            }
        }

        Ok(result)
    }
}
