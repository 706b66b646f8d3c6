use crate::division::Division;
use crate::error::{SimulationError, SimulationResult};
use crate::event::{Event, Fight, FightStatus};
use crate::fighter::Fighter;
use crate::world::SaveConfig;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// The whole simulated league held in memory between a load and a save.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    pub divisions: BTreeMap<String, Division>,
    pub events: Vec<Event>,
    pub fights: Vec<Fight>,
    pub save: SaveConfig,
}

impl WorldState {
    pub fn new(divisions: Vec<Division>, events: Vec<Event>, fights: Vec<Fight>, save: SaveConfig) -> Self {
        WorldState {
            divisions: divisions.into_iter().map(|d| (d.name.clone(), d)).collect(),
            events,
            fights,
            save,
        }
    }

    pub fn division(&self, name: &str) -> SimulationResult<&Division> {
        self.divisions
            .get(name)
            .ok_or_else(|| SimulationError::DivisionNotFound(name.to_string()))
    }

    pub fn division_mut(&mut self, name: &str) -> SimulationResult<&mut Division> {
        self.divisions
            .get_mut(name)
            .ok_or_else(|| SimulationError::DivisionNotFound(name.to_string()))
    }

    pub fn find_fighter(&self, division: &str, id: u32) -> SimulationResult<&Fighter> {
        self.division(division)?.find(id)
    }

    /// Display name, or `#<id>` when the roster has no such fighter.
    pub fn fighter_name(&self, division: &str, id: u32) -> String {
        fighter_name(&self.divisions, division, id)
    }

    pub fn current_champ(&self, division: &str) -> Option<&Fighter> {
        self.divisions.get(division).and_then(|d| d.champion())
    }

    pub fn event(&self, event_id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn event_on(&self, date: NaiveDate) -> Option<&Event> {
        self.events.iter().find(|e| e.date == date)
    }

    /// Earliest event on or after `today` that has not been run yet.
    pub fn next_event(&self, today: NaiveDate) -> Option<&Event> {
        self.events
            .iter()
            .filter(|e| !e.completed && e.date >= today)
            .min_by_key(|e| e.date)
    }

    pub fn event_fights(&self, event_id: u32) -> impl Iterator<Item = &Fight> {
        self.fights.iter().filter(move |f| f.event_id == event_id)
    }

    /// Latest completed bouts of one fighter, newest first.
    pub fn fighter_fights(&self, division: &str, fighter_id: u32, limit: usize) -> Vec<&Fight> {
        let mut fights: Vec<(NaiveDate, &Fight)> = self
            .fights
            .iter()
            .filter(|f| f.status == FightStatus::Completed && f.division == division && f.involves(fighter_id))
            .filter_map(|f| self.event(f.event_id).map(|e| (e.date, f)))
            .collect();

        fights.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.id.cmp(&a.1.id)));
        fights.into_iter().take(limit).map(|(_, f)| f).collect()
    }

    pub fn is_injured(&self, division: &str, fighter_id: u32, today: NaiveDate) -> SimulationResult<bool> {
        Ok(self.find_fighter(division, fighter_id)?.is_injured(today))
    }

    /// Seeds empty rating and rank histories with one point at `start`.
    /// Returns whether anything was filled in.
    pub fn ensure_histories_initialized(&mut self, start: NaiveDate) -> bool {
        let mut changed = false;

        for division in self.divisions.values_mut() {
            for fighter in division.fighters.iter_mut() {
                if fighter.rating_history.is_empty() {
                    fighter.push_rating_point(start);
                    changed = true;
                }
                if fighter.rank_history.is_empty() {
                    fighter.push_rank_point(start);
                    changed = true;
                }
            }
        }

        if changed {
            debug!("📈 histories initialized at {}", start);
        }

        changed
    }

    pub fn advance_to_next_week(&mut self) -> NaiveDate {
        self.save.advance_to_next_week()
    }

    pub fn fighters_count(&self) -> usize {
        self.divisions.values().map(|d| d.fighters.len()).sum()
    }
}

pub(crate) fn fighter_name(divisions: &BTreeMap<String, Division>, division: &str, id: u32) -> String {
    divisions
        .get(division)
        .and_then(|d| d.find(id).ok())
        .map(|f| f.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}
