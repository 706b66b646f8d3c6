use crate::generators::FighterGenerator;
use crate::DatabaseResult;
use log::info;
use octagon_core::{Division, FighterRank, PairHistory, RankingManager, SaveConfig, WorldState};
use rand::Rng;
use std::cmp::Ordering;

pub const DEFAULT_DIVISIONS: [&str; 8] = [
    "Flyweight",
    "Bantamweight",
    "Featherweight",
    "Lightweight",
    "Welterweight",
    "Middleweight",
    "Light Heavyweight",
    "Heavyweight",
];

pub const DEFAULT_ROSTER_SIZE: usize = 30;

const RATING_SPREAD: f64 = 220.0;

pub struct WorldGenerator;

impl WorldGenerator {
    /// Fresh league: every division gets a roster whose best-rated fighter
    /// holds the belt and the next fifteen take the ranked slots.
    pub fn generate(divisions: &[&str], roster_size: usize, save: SaveConfig) -> DatabaseResult<WorldState> {
        let mut rng = save.rng();
        let generator = FighterGenerator::default();

        let divisions = divisions
            .iter()
            .map(|name| Self::generate_division(&generator, name, roster_size, &mut rng))
            .collect::<DatabaseResult<Vec<Division>>>()?;

        let start = save.current_date;
        let mut world = WorldState::new(divisions, Vec::new(), Vec::new(), save);
        world.ensure_histories_initialized(start);

        info!(
            "🌍 new world generated: {} divisions, {} fighters",
            world.divisions.len(),
            world.fighters_count()
        );

        Ok(world)
    }

    fn generate_division<R: Rng + ?Sized>(
        generator: &FighterGenerator,
        name: &str,
        roster_size: usize,
        rng: &mut R,
    ) -> DatabaseResult<Division> {
        let mut fighters = (1..=roster_size as u32)
            .map(|id| {
                let spread = rng.gen_range(-RATING_SPREAD..RATING_SPREAD) + rng.gen_range(-RATING_SPREAD..RATING_SPREAD);
                generator.generate(id, name, 1500.0 + spread / 2.0, rng)
            })
            .collect::<DatabaseResult<Vec<_>>>()?;

        if let Some(best) = fighters
            .iter_mut()
            .max_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal))
        {
            best.rank = FighterRank::Champion;
        }

        RankingManager::recompute_top15(&mut fighters);

        Ok(Division::new(name.to_string(), fighters, PairHistory::new()))
    }
}
