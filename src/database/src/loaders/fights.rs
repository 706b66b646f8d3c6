use crate::loaders::{label_of, lenient_flag, lenient_opt_int, parse_label, read_json, write_json};
use crate::{DataRoot, DatabaseResult};
use octagon_core::{Fight, FightResult, FightStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FightEntity {
    pub fight_id: u32,
    pub event_id: u32,
    pub division: String,
    pub a_id: u32,
    pub b_id: u32,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_top15: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_main_event: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_title_fight: bool,
    pub card_slot: String,
    pub status: String,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub winner_id: Option<u32>,
    pub method: String,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub round: Option<u8>,
    pub time_mmss: String,
}

impl FightEntity {
    pub fn into_fight(self) -> Fight {
        let status: FightStatus = parse_label(&self.status).unwrap_or_default();

        let result = match (status, self.winner_id) {
            (FightStatus::Completed, Some(winner_id)) => Some(FightResult {
                winner_id,
                method: self.method,
                round: self.round.unwrap_or(3),
                time: self.time_mmss,
            }),
            _ => None,
        };

        Fight {
            id: self.fight_id,
            event_id: self.event_id,
            division: self.division,
            a_id: self.a_id,
            b_id: self.b_id,
            is_top15: self.is_top15,
            is_main_event: self.is_main_event,
            is_title_fight: self.is_title_fight,
            card_slot: parse_label(&self.card_slot),
            status,
            result,
        }
    }

    pub fn from_fight(fight: &Fight) -> Self {
        let result = fight.result.as_ref();

        FightEntity {
            fight_id: fight.id,
            event_id: fight.event_id,
            division: fight.division.clone(),
            a_id: fight.a_id,
            b_id: fight.b_id,
            is_top15: fight.is_top15,
            is_main_event: fight.is_main_event,
            is_title_fight: fight.is_title_fight,
            card_slot: fight.card_slot.as_ref().map(label_of).unwrap_or_default(),
            status: label_of(&fight.status),
            winner_id: result.map(|r| r.winner_id),
            method: result.map(|r| r.method.clone()).unwrap_or_default(),
            round: result.map(|r| r.round),
            time_mmss: result.map(|r| r.time.clone()).unwrap_or_default(),
        }
    }
}

pub struct FightLoader;

impl FightLoader {
    pub fn load(root: &DataRoot) -> DatabaseResult<Vec<Fight>> {
        let entities: Vec<FightEntity> = read_json(&root.fights_path())?;
        Ok(entities.into_iter().map(FightEntity::into_fight).collect())
    }

    pub fn save(root: &DataRoot, fights: &[Fight]) -> DatabaseResult<()> {
        let entities: Vec<FightEntity> = fights.iter().map(FightEntity::from_fight).collect();
        write_json(&root.fights_path(), &entities)
    }
}
