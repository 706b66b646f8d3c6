use crate::fighter::{BoundedHistory, FighterBuilder, FighterRank, RankPoint, RatingPoint};
use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Result};

pub const DEFAULT_RATING: f64 = 1500.0;

/// Days a fighter without a recorded next-available date must rest after a bout.
pub const DEFAULT_REST_DAYS: i64 = 49;

#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub division: String,
    pub age: u8,

    pub rating: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub streak: i32,

    pub rank: FighterRank,

    pub last_fight_date: Option<NaiveDate>,
    pub next_available_date: Option<NaiveDate>,
    pub is_active: bool,

    pub rating_history: BoundedHistory<RatingPoint>,
    pub rank_history: BoundedHistory<RankPoint>,
}

impl Fighter {
    pub fn builder() -> FighterBuilder {
        FighterBuilder::new()
    }

    pub fn is_champ(&self) -> bool {
        self.rank.is_champion()
    }

    pub fn rank_slot(&self) -> Option<u8> {
        self.rank.slot()
    }

    pub fn is_ranked(&self) -> bool {
        self.rank.slot().is_some()
    }

    pub fn is_unranked(&self) -> bool {
        self.rank == FighterRank::Unranked
    }

    /// Whether the fighter can be booked for a bout on `when`.
    pub fn is_available(&self, when: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }

        match self.next_available_date {
            Some(next) => when >= next,
            None => match self.last_fight_date {
                Some(last) => (when - last).num_days() >= DEFAULT_REST_DAYS,
                None => true,
            },
        }
    }

    pub fn is_injured(&self, today: NaiveDate) -> bool {
        self.next_available_date.is_some_and(|next| next > today)
    }

    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.draws)
    }

    pub fn push_rating_point(&mut self, date: NaiveDate) {
        self.rating_history.push(RatingPoint {
            date,
            rating: self.rating,
        });
    }

    pub fn push_rank_point(&mut self, date: NaiveDate) {
        self.rank_history.push(RankPoint {
            date,
            rank: self.rank.value(),
        });
    }

    pub fn register_win(&mut self) {
        self.wins += 1;
        self.streak = if self.streak >= 0 { self.streak + 1 } else { 1 };
    }

    pub fn register_loss(&mut self) {
        self.losses += 1;
        self.streak = if self.streak <= 0 { self.streak - 1 } else { -1 };
    }
}

impl Display for Fighter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.rank, self.record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fighter() -> Fighter {
        Fighter::builder()
            .id(1)
            .name(String::from("Test Fighter"))
            .division(String::from("Flyweight"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_availability_uses_next_available_date() {
        let mut f = fighter();
        f.next_available_date = Some(date(2026, 3, 1));

        assert!(!f.is_available(date(2026, 2, 28)));
        assert!(f.is_available(date(2026, 3, 1)));
    }

    #[test]
    fn test_availability_falls_back_to_rest_period() {
        let mut f = fighter();
        f.last_fight_date = Some(date(2026, 1, 3));

        assert!(!f.is_available(date(2026, 2, 20)));
        assert!(f.is_available(date(2026, 2, 21)));
    }

    #[test]
    fn test_inactive_is_never_available() {
        let mut f = fighter();
        f.is_active = false;
        assert!(!f.is_available(date(2030, 1, 1)));
    }

    #[test]
    fn test_streak_flips_sign() {
        let mut f = fighter();
        f.register_win();
        f.register_win();
        assert_eq!(f.streak, 2);

        f.register_loss();
        assert_eq!(f.streak, -1);
        f.register_loss();
        assert_eq!(f.streak, -2);

        f.register_win();
        assert_eq!(f.streak, 1);
        assert_eq!((f.wins, f.losses), (3, 2));
    }

    #[test]
    fn test_rank_point_records_champion_as_zero() {
        let mut f = fighter();
        f.rank = FighterRank::Champion;
        f.push_rank_point(date(2026, 1, 3));
        assert_eq!(f.rank_history.last().unwrap().rank, Some(0));
    }
}
