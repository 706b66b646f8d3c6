use crate::calendar::{PlanConfig, is_event_day};
use crate::error::SimulationResult;
use crate::planner::{EventPlanner, EventRunResult, EventRunner, PlanningResult};
use crate::simulation::SimConfig;
use crate::world::WorldState;
use chrono::NaiveDate;
use log::info;

#[derive(Debug, Clone, Default)]
pub struct LeagueConfig {
    pub simulation: SimConfig,
    pub planning: PlanConfig,
}

#[derive(Debug, Clone)]
pub struct WeekResult {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub histories_initialized: bool,
    pub planned_before: PlanningResult,
    pub planned_after: PlanningResult,
    pub event: Option<EventRunResult>,
}

pub struct LeagueSimulator;

impl LeagueSimulator {
    /// One weekly turn: plan at today, move to the next Saturday, plan
    /// again and run whatever event falls on the new date.
    pub fn simulate_week(world: &mut WorldState, config: &LeagueConfig) -> SimulationResult<WeekResult> {
        let mut rng = world.save.rng();
        let from = world.save.current_date;

        let histories_initialized = world.ensure_histories_initialized(from);

        let planned_before = EventPlanner::ensure_events_planned(world, from, &config.planning, &mut rng)?;
        let to = world.advance_to_next_week();
        let planned_after = EventPlanner::ensure_events_planned(world, to, &config.planning, &mut rng)?;

        let event = if is_event_day(to) {
            EventRunner::run_event(world, to, &config.simulation, &config.planning, &mut rng)?
        } else {
            None
        };

        info!("📅 week simulated: {} -> {}", from, to);

        Ok(WeekResult {
            from,
            to,
            histories_initialized,
            planned_before,
            planned_after,
            event,
        })
    }
}
