use crate::{DatabaseError, DatabaseResult};
use octagon_core::{Fighter, FighterRank};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../../data/names.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CountryNamesEntity {
    pub country: String,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

pub struct NamesLoader;

impl NamesLoader {
    pub fn load() -> Vec<CountryNamesEntity> {
        serde_json::from_str(STATIC_NAMES_JSON).unwrap_or_default()
    }
}

pub struct FighterGenerator {
    names: Vec<CountryNamesEntity>,
}

impl Default for FighterGenerator {
    fn default() -> Self {
        Self::with_names(NamesLoader::load())
    }
}

impl FighterGenerator {
    pub fn with_names(names: Vec<CountryNamesEntity>) -> Self {
        FighterGenerator { names }
    }

    /// Unranked fighter with a random nationality, age and record.
    /// Ranks are handed out later by rating.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        id: u32,
        division: &str,
        rating: f64,
        rng: &mut R,
    ) -> DatabaseResult<Fighter> {
        let (name, country) = self.generate_name(rng);

        let experience = rng.gen_range(0..=14u32);
        let skill = ((rating - 1300.0) / 400.0).clamp(0.0, 1.0);
        let wins = 5 + experience + (skill * 10.0).round() as u32;
        let losses = rng.gen_range(0..=(2 + experience / 2));
        let draws = if rng.gen_range(0.0..1.0) < 0.15 { 1 } else { 0 };

        Fighter::builder()
            .id(id)
            .name(name)
            .country(country)
            .division(division.to_string())
            .age(rng.gen_range(21..=38))
            .rating(rating)
            .record(wins, draws, losses)
            .streak(rng.gen_range(-2..=4))
            .rank(FighterRank::Unranked)
            .build()
            .map_err(DatabaseError::InvalidRecord)
    }

    fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> (String, String) {
        let Some(country) = self.names.choose(rng) else {
            return (String::from("Unknown Fighter"), String::new());
        };

        let first = country.first_names.choose(rng).map(String::as_str).unwrap_or("Unknown");
        let last = country.last_names.choose(rng).map(String::as_str).unwrap_or("Fighter");

        (format!("{} {}", first, last), country.country.clone())
    }
}
