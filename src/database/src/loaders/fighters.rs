use crate::loaders::{
    format_date, lenient_flag, lenient_list, lenient_opt_int, optional_date, read_json, write_json,
};
use crate::{DataRoot, DatabaseError, DatabaseResult};
use octagon_core::{DEFAULT_RATING, Fighter, FighterRank, RankPoint, RatingPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterEntity {
    pub id: u32,
    pub division: String,
    pub name: String,
    pub country: String,
    pub age: u8,
    pub rank_raw: String,
    pub rank_type: String,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub rank_slot: Option<u8>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_champ: bool,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub rating: f64,
    pub streak: i32,
    pub last_fight_date: String,
    pub next_available_date: String,
    #[serde(deserialize_with = "lenient_list")]
    pub rating_history: Vec<RatingPoint>,
    #[serde(deserialize_with = "lenient_list")]
    pub rank_history: Vec<RankPoint>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_active: bool,
}

impl Default for FighterEntity {
    fn default() -> Self {
        FighterEntity {
            id: 0,
            division: String::new(),
            name: String::new(),
            country: String::new(),
            age: 30,
            rank_raw: String::new(),
            rank_type: String::new(),
            rank_slot: None,
            is_champ: false,
            wins: 0,
            draws: 0,
            losses: 0,
            rating: DEFAULT_RATING,
            streak: 0,
            last_fight_date: String::new(),
            next_available_date: String::new(),
            rating_history: Vec::new(),
            rank_history: Vec::new(),
            is_active: true,
        }
    }
}

impl FighterEntity {
    /// Fills what older saves left out: the division comes from the
    /// folder, the rank from the champion flag and slot.
    pub fn into_fighter(self, division: &str) -> DatabaseResult<Fighter> {
        let division = if self.division.trim().is_empty() {
            division.to_string()
        } else {
            self.division
        };

        Fighter::builder()
            .id(self.id)
            .name(self.name)
            .country(self.country)
            .division(division)
            .age(self.age)
            .rating(self.rating)
            .record(self.wins, self.draws, self.losses)
            .streak(self.streak)
            .rank(FighterRank::from_parts(self.is_champ, self.rank_slot))
            .last_fight_date(optional_date("last_fight_date", &self.last_fight_date))
            .next_available_date(optional_date("next_available_date", &self.next_available_date))
            .is_active(self.is_active)
            .rating_history(self.rating_history)
            .rank_history(self.rank_history)
            .build()
            .map_err(DatabaseError::InvalidRecord)
    }

    pub fn from_fighter(fighter: &Fighter) -> Self {
        FighterEntity {
            id: fighter.id,
            division: fighter.division.clone(),
            name: fighter.name.clone(),
            country: fighter.country.clone(),
            age: fighter.age,
            rank_raw: fighter.rank.raw_label(),
            rank_type: fighter.rank.type_label().to_string(),
            rank_slot: fighter.rank_slot(),
            is_champ: fighter.is_champ(),
            wins: fighter.wins,
            draws: fighter.draws,
            losses: fighter.losses,
            rating: fighter.rating,
            streak: fighter.streak,
            last_fight_date: format_date(fighter.last_fight_date),
            next_available_date: format_date(fighter.next_available_date),
            rating_history: fighter.rating_history.iter().copied().collect(),
            rank_history: fighter.rank_history.iter().copied().collect(),
            is_active: fighter.is_active,
        }
    }
}

pub struct FighterLoader;

impl FighterLoader {
    pub fn load(root: &DataRoot, division: &str) -> DatabaseResult<Vec<Fighter>> {
        let entities: Vec<FighterEntity> = read_json(&root.fighters_path(division))?;

        entities
            .into_iter()
            .map(|entity| entity.into_fighter(division))
            .collect()
    }

    pub fn save(root: &DataRoot, division: &str, fighters: &[Fighter]) -> DatabaseResult<()> {
        let entities: Vec<FighterEntity> = fighters.iter().map(FighterEntity::from_fighter).collect();
        write_json(&root.fighters_path(division), &entities)
    }
}
