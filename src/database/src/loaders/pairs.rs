use crate::loaders::{format_date, optional_date, read_json, write_json};
use crate::{DataRoot, DatabaseResult};
use octagon_core::PairHistory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairEntity {
    pub a_id: u32,
    pub b_id: u32,
    pub last_fight_date: String,
}

pub struct PairLoader;

impl PairLoader {
    /// Rows without a readable date carry no cooldown and are dropped.
    pub fn load(root: &DataRoot, division: &str) -> DatabaseResult<PairHistory> {
        let entities: Vec<PairEntity> = read_json(&root.pairs_path(division))?;

        Ok(entities
            .into_iter()
            .filter_map(|p| optional_date("last_fight_date", &p.last_fight_date).map(|d| (p.a_id, p.b_id, d)))
            .collect())
    }

    pub fn save(root: &DataRoot, division: &str, history: &PairHistory) -> DatabaseResult<()> {
        let entities: Vec<PairEntity> = history
            .iter()
            .map(|(key, date)| PairEntity {
                a_id: key.low(),
                b_id: key.high(),
                last_fight_date: format_date(Some(*date)),
            })
            .collect();

        write_json(&root.pairs_path(division), &entities)
    }
}
