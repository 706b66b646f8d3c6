use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardSlot {
    MainEvent,
    CoMain,
    MainCard,
    Prelims,
}

impl CardSlot {
    pub fn is_featured(&self) -> bool {
        matches!(self, CardSlot::MainEvent | CardSlot::CoMain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FightStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightResult {
    pub winner_id: u32,
    pub method: String,
    pub round: u8,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fight {
    pub id: u32,
    pub event_id: u32,
    pub division: String,
    pub a_id: u32,
    pub b_id: u32,
    pub is_top15: bool,
    pub is_main_event: bool,
    pub is_title_fight: bool,
    pub card_slot: Option<CardSlot>,
    pub status: FightStatus,
    pub result: Option<FightResult>,
}

impl Fight {
    pub fn scheduled(id: u32, event_id: u32, division: &str, a_id: u32, b_id: u32) -> Self {
        Fight {
            id,
            event_id,
            division: division.to_string(),
            a_id,
            b_id,
            is_top15: false,
            is_main_event: false,
            is_title_fight: false,
            card_slot: None,
            status: FightStatus::Scheduled,
            result: None,
        }
    }

    pub fn top15(mut self, is_top15: bool) -> Self {
        self.is_top15 = is_top15;
        self
    }

    pub fn featured(mut self, slot: CardSlot, is_main_event: bool, is_title_fight: bool) -> Self {
        self.card_slot = Some(slot);
        self.is_main_event = is_main_event;
        self.is_title_fight = is_title_fight;
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == FightStatus::Scheduled
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == FightStatus::Cancelled
    }

    pub fn is_featured(&self) -> bool {
        self.card_slot.is_some_and(|slot| slot.is_featured())
    }

    pub fn is_self_bout(&self) -> bool {
        self.a_id != 0 && self.a_id == self.b_id
    }

    pub fn involves(&self, fighter_id: u32) -> bool {
        self.a_id == fighter_id || self.b_id == fighter_id
    }

    pub fn opponent_of(&self, fighter_id: u32) -> Option<u32> {
        if self.a_id == fighter_id {
            Some(self.b_id)
        } else if self.b_id == fighter_id {
            Some(self.a_id)
        } else {
            None
        }
    }

    /// Terminal transition; a bout that is no longer scheduled stays as it is.
    pub fn cancel(&mut self) -> bool {
        if self.status != FightStatus::Scheduled {
            return false;
        }
        self.status = FightStatus::Cancelled;
        true
    }

    pub fn complete(&mut self, result: FightResult) -> bool {
        if self.status != FightStatus::Scheduled {
            return false;
        }
        self.status = FightStatus::Completed;
        self.result = Some(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states_are_final() {
        let mut fight = Fight::scheduled(1, 1, "Flyweight", 1, 2);
        assert!(fight.cancel());
        assert!(!fight.cancel());
        assert!(!fight.complete(FightResult {
            winner_id: 1,
            method: String::from("U-DEC"),
            round: 3,
            time: String::from("05:00"),
        }));
        assert_eq!(fight.status, FightStatus::Cancelled);
        assert!(fight.result.is_none());
    }

    #[test]
    fn test_self_bout_detection() {
        assert!(Fight::scheduled(1, 1, "Flyweight", 4, 4).is_self_bout());
        assert!(!Fight::scheduled(1, 1, "Flyweight", 4, 5).is_self_bout());
        assert!(!Fight::scheduled(1, 1, "Flyweight", 0, 0).is_self_bout());
    }

    #[test]
    fn test_opponent_of() {
        let fight = Fight::scheduled(1, 1, "Flyweight", 4, 5);
        assert_eq!(fight.opponent_of(4), Some(5));
        assert_eq!(fight.opponent_of(5), Some(4));
        assert_eq!(fight.opponent_of(6), None);
    }
}
