use crate::fighter::{BoundedHistory, DEFAULT_RATING, Fighter, FighterRank, RankPoint, RatingPoint};
use chrono::NaiveDate;

#[derive(Default)]
pub struct FighterBuilder {
    id: Option<u32>,
    name: Option<String>,
    country: Option<String>,
    division: Option<String>,
    age: Option<u8>,
    rating: Option<f64>,
    wins: Option<u32>,
    draws: Option<u32>,
    losses: Option<u32>,
    streak: Option<i32>,
    rank: Option<FighterRank>,
    last_fight_date: Option<NaiveDate>,
    next_available_date: Option<NaiveDate>,
    is_active: Option<bool>,
    rating_history: Option<Vec<RatingPoint>>,
    rank_history: Option<Vec<RankPoint>>,
}

impl FighterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn country(mut self, country: String) -> Self {
        self.country = Some(country);
        self
    }

    pub fn division(mut self, division: String) -> Self {
        self.division = Some(division);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn record(mut self, wins: u32, draws: u32, losses: u32) -> Self {
        self.wins = Some(wins);
        self.draws = Some(draws);
        self.losses = Some(losses);
        self
    }

    pub fn streak(mut self, streak: i32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn rank(mut self, rank: FighterRank) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn last_fight_date(mut self, date: Option<NaiveDate>) -> Self {
        self.last_fight_date = date;
        self
    }

    pub fn next_available_date(mut self, date: Option<NaiveDate>) -> Self {
        self.next_available_date = date;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn rating_history(mut self, history: Vec<RatingPoint>) -> Self {
        self.rating_history = Some(history);
        self
    }

    pub fn rank_history(mut self, history: Vec<RankPoint>) -> Self {
        self.rank_history = Some(history);
        self
    }

    pub fn build(self) -> Result<Fighter, String> {
        Ok(Fighter {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            country: self.country.unwrap_or_default(),
            division: self.division.unwrap_or_default(),
            age: self.age.unwrap_or(30),
            rating: self.rating.unwrap_or(DEFAULT_RATING),
            wins: self.wins.unwrap_or(0),
            draws: self.draws.unwrap_or(0),
            losses: self.losses.unwrap_or(0),
            streak: self.streak.unwrap_or(0),
            rank: self.rank.unwrap_or_default(),
            last_fight_date: self.last_fight_date,
            next_available_date: self.next_available_date,
            is_active: self.is_active.unwrap_or(true),
            rating_history: BoundedHistory::from_items(self.rating_history.unwrap_or_default()),
            rank_history: BoundedHistory::from_items(self.rank_history.unwrap_or_default()),
        })
    }
}
