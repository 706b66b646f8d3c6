use color_eyre::eyre::{Result, eyre};
use env_logger::Env;
use log::info;
use octagon_core::utils::TimeEstimation;
use octagon_core::{LeagueConfig, LeagueSimulator, SaveConfig, StateStore, headline_notes};
use octagon_database::{DEFAULT_DIVISIONS, DEFAULT_ROSTER_SIZE, DataRoot, JsonStateStore, WorldGenerator};
use std::env;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let root = DataRoot::new(env::var("OCTAGON_DATA").unwrap_or_else(|_| String::from("./data")));
    let weeks: u32 = env::var("OCTAGON_WEEKS")
        .ok()
        .map(|w| w.parse())
        .transpose()?
        .unwrap_or(1);
    let seed: Option<u64> = env::var("OCTAGON_SEED").ok().map(|s| s.parse()).transpose()?;
    let is_new_game = env::var("MODE") == Ok(String::from("NEWGAME"));

    let store = JsonStateStore::new(root);

    if is_new_game {
        let save = SaveConfig {
            random_seed: seed.unwrap_or(SaveConfig::default().random_seed),
            ..SaveConfig::default()
        };
        let world = WorldGenerator::generate(&DEFAULT_DIVISIONS, DEFAULT_ROSTER_SIZE, save)?;
        store.save_state(&world)?;
        info!("new game created in {}", store.root().path().display());
    }

    let (world, estimated) = TimeEstimation::estimate(|| store.load_state());
    let mut world = world?;

    info!("state loaded: {} ms", estimated);

    if let Some(seed) = seed.filter(|_| !is_new_game) {
        world.save.reseed(seed);
        info!("🎲 seed reset to {}", seed);
    }

    let config = LeagueConfig::default();

    for _ in 0..weeks {
        let (week, estimated) = TimeEstimation::estimate(|| LeagueSimulator::simulate_week(&mut world, &config));
        let week = week?;

        info!("week {} -> {} simulated: {} ms", week.from, week.to, estimated);

        if let Some(result) = &week.event {
            let event = world
                .event(result.event_id)
                .ok_or_else(|| eyre!("event {} vanished after running", result.event_id))?;

            info!("📍 {}", event.display_name());
            for note in headline_notes(&event.notes) {
                info!("{}", note.text);
            }
        }
    }

    store.save_state(&world)?;

    Ok(())
}
