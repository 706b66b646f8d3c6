use crate::calendar::PlanConfig;
use crate::division::Division;
use crate::error::{SimulationError, SimulationResult};
use crate::event::{Event, Fight};
use crate::planner::append_fight;
use crate::world::{SaveConfig, fighter_name};
use std::collections::BTreeMap;

/// Borrowed slices of the world that matchmaking works against.
///
/// Rosters are shared so fighter references can be held while bouts are
/// pushed and the fight counter moves.
pub struct PlanningContext<'a> {
    pub divisions: &'a BTreeMap<String, Division>,
    pub fights: &'a mut Vec<Fight>,
    pub save: &'a mut SaveConfig,
    pub config: &'a PlanConfig,
}

impl<'a> PlanningContext<'a> {
    pub fn new(
        divisions: &'a BTreeMap<String, Division>,
        fights: &'a mut Vec<Fight>,
        save: &'a mut SaveConfig,
        config: &'a PlanConfig,
    ) -> Self {
        PlanningContext {
            divisions,
            fights,
            save,
            config,
        }
    }

    pub fn division(&self, name: &str) -> SimulationResult<&'a Division> {
        let divisions = self.divisions;
        divisions
            .get(name)
            .ok_or_else(|| SimulationError::DivisionNotFound(name.to_string()))
    }

    pub fn division_names(&self) -> Vec<&'a str> {
        let divisions = self.divisions;
        divisions.keys().map(String::as_str).collect()
    }

    pub fn fighter_name(&self, division: &str, id: u32) -> String {
        fighter_name(self.divisions, division, id)
    }

    /// Appends the bout under the next fight id. The counter only moves
    /// when the bout is accepted.
    pub fn book(&mut self, event: &mut Event, mut fight: Fight) -> Option<u32> {
        let id = self.save.next_fight_id;
        fight.id = id;

        if append_fight(self.fights, fight, Some(event)) {
            self.save.take_fight_id();
            Some(id)
        } else {
            None
        }
    }
}
