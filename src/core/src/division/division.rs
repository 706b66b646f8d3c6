use crate::error::{SimulationError, SimulationResult};
use crate::fighter::Fighter;
use crate::matchmaking::PairHistory;
use chrono::NaiveDate;

/// One weight class: its roster and who has fought whom.
#[derive(Debug, Clone, Default)]
pub struct Division {
    pub name: String,
    pub fighters: Vec<Fighter>,
    pub pair_history: PairHistory,
}

impl Division {
    pub fn new(name: String, fighters: Vec<Fighter>, pair_history: PairHistory) -> Self {
        Division {
            name,
            fighters,
            pair_history,
        }
    }

    pub fn find(&self, id: u32) -> SimulationResult<&Fighter> {
        self.fighters
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| self.not_found(id))
    }

    pub fn find_mut(&mut self, id: u32) -> SimulationResult<&mut Fighter> {
        let name = &self.name;
        self.fighters
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| SimulationError::FighterNotFound {
                division: name.clone(),
                id,
            })
    }

    fn not_found(&self, id: u32) -> SimulationError {
        SimulationError::FighterNotFound {
            division: self.name.clone(),
            id,
        }
    }

    pub fn champion(&self) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.is_champ())
    }

    /// Ranked fighters in slot order.
    pub fn ranked(&self) -> Vec<&Fighter> {
        let mut ranked: Vec<&Fighter> = self.fighters.iter().filter(|f| f.is_ranked()).collect();
        ranked.sort_by_key(|f| f.rank_slot());
        ranked
    }

    pub fn unranked(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter().filter(|f| f.is_unranked())
    }

    pub fn available_ranked(&self, on: NaiveDate) -> Vec<&Fighter> {
        self.ranked().into_iter().filter(|f| f.is_available(on)).collect()
    }

    pub fn available_unranked(&self, on: NaiveDate) -> Vec<&Fighter> {
        self.unranked().filter(|f| f.is_available(on)).collect()
    }

    /// Both sides hold a numbered rank slot (the champion does not count).
    pub fn is_ranked_pairing(&self, a_id: u32, b_id: u32) -> SimulationResult<bool> {
        Ok(self.find(a_id)?.is_ranked() && self.find(b_id)?.is_ranked())
    }

    pub fn is_top_tier_pairing(&self, a_id: u32, b_id: u32) -> SimulationResult<bool> {
        Ok(self.find(a_id)?.rank.is_top_tier() && self.find(b_id)?.rank.is_top_tier())
    }

    pub fn average_rating(&self, a_id: u32, b_id: u32) -> SimulationResult<f64> {
        Ok((self.find(a_id)?.rating + self.find(b_id)?.rating) / 2.0)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.fighters
            .iter()
            .map(|f| f.country.trim())
            .filter(|c| !c.is_empty())
    }
}
