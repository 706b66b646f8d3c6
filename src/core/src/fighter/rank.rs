use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const RANKED_SLOTS: u8 = 15;

/// Ranking position of a fighter inside their division.
///
/// Champion, ranked slot and unranked are mutually exclusive, so the
/// "champion has no slot" rule holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FighterRank {
    Champion,
    Ranked(u8),
    #[default]
    Unranked,
}

impl FighterRank {
    pub fn from_parts(is_champ: bool, rank_slot: Option<u8>) -> Self {
        if is_champ {
            return FighterRank::Champion;
        }

        match rank_slot {
            Some(slot) if (1..=RANKED_SLOTS).contains(&slot) => FighterRank::Ranked(slot),
            _ => FighterRank::Unranked,
        }
    }

    pub fn is_champion(&self) -> bool {
        matches!(self, FighterRank::Champion)
    }

    pub fn slot(&self) -> Option<u8> {
        match self {
            FighterRank::Ranked(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Numeric rank used by the rating update: champion is 0.
    pub fn value(&self) -> Option<u8> {
        match self {
            FighterRank::Champion => Some(0),
            FighterRank::Ranked(slot) => Some(*slot),
            FighterRank::Unranked => None,
        }
    }

    /// Champion or ranked 1..=8.
    pub fn is_top_tier(&self) -> bool {
        match self {
            FighterRank::Champion => true,
            FighterRank::Ranked(slot) => *slot <= 8,
            FighterRank::Unranked => false,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            FighterRank::Champion => "CHAMP",
            FighterRank::Ranked(_) => "RANKED",
            FighterRank::Unranked => "UNRANKED",
        }
    }

    pub fn raw_label(&self) -> String {
        match self {
            FighterRank::Champion => String::from("C"),
            FighterRank::Ranked(slot) => slot.to_string(),
            FighterRank::Unranked => String::from("***"),
        }
    }
}

impl Display for FighterRank {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FighterRank::Champion => write!(f, "C"),
            FighterRank::Ranked(slot) => write!(f, "{}", slot),
            FighterRank::Unranked => write!(f, "-"),
        }
    }
}
