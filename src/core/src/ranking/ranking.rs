use crate::fighter::{Fighter, FighterRank, RANKED_SLOTS};
use log::warn;
use std::cmp::Ordering;

pub struct RankingManager;

impl RankingManager {
    /// Re-slots a division roster after an event.
    ///
    /// The champion keeps the belt and holds no slot. Everyone else is
    /// ordered by rating, then streak, both descending; the first fifteen
    /// take slots 1..=15 and the rest drop to unranked. Equal keys keep
    /// their roster order.
    pub fn recompute_top15(fighters: &mut [Fighter]) {
        let mut champion_seen = false;
        for fighter in fighters.iter_mut() {
            if !fighter.is_champ() {
                continue;
            }
            if champion_seen {
                warn!("👑 {} held a second belt in {}, demoting", fighter.name, fighter.division);
                fighter.rank = FighterRank::Unranked;
            }
            champion_seen = true;
        }

        let mut order: Vec<usize> = (0..fighters.len()).filter(|&idx| !fighters[idx].is_champ()).collect();
        order.sort_by(|&a, &b| Self::compare(&fighters[a], &fighters[b]));

        for (position, idx) in order.into_iter().enumerate() {
            let slot = position + 1;
            fighters[idx].rank = if slot <= RANKED_SLOTS as usize {
                FighterRank::Ranked(slot as u8)
            } else {
                FighterRank::Unranked
            };
        }
    }

    fn compare(a: &Fighter, b: &Fighter) -> Ordering {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.streak.cmp(&a.streak))
    }
}
