use crate::loaders::{EventLoader, FightLoader, FighterLoader, PairLoader, SaveLoader};
use crate::{DataRoot, DatabaseError, DatabaseResult};
use log::{debug, info};
use octagon_core::{Division, StateStore, WorldState};
use std::fs;

/// World state kept as JSON files under one data root.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    root: DataRoot,
}

impl JsonStateStore {
    pub fn new(root: DataRoot) -> Self {
        JsonStateStore { root }
    }

    pub fn root(&self) -> &DataRoot {
        &self.root
    }

    /// Creates the global files on first use so a fresh root loads cleanly.
    fn ensure_global_files(&self) -> DatabaseResult<()> {
        fs::create_dir_all(self.root.global_dir())?;

        if !self.root.events_path().exists() {
            EventLoader::save(&self.root, &[])?;
        }
        if !self.root.fights_path().exists() {
            FightLoader::save(&self.root, &[])?;
        }
        if !self.root.save_path().exists() {
            SaveLoader::save(&self.root, &Default::default())?;
            debug!("💾 new save file at {}", self.root.save_path().display());
        }

        Ok(())
    }
}

impl StateStore for JsonStateStore {
    type Error = DatabaseError;

    fn load_state(&self) -> Result<WorldState, Self::Error> {
        self.ensure_global_files()?;

        let divisions = self
            .root
            .list_divisions()?
            .into_iter()
            .map(|name| {
                let fighters = FighterLoader::load(&self.root, &name)?;
                let pairs = PairLoader::load(&self.root, &name)?;
                Ok(Division::new(name, fighters, pairs))
            })
            .collect::<DatabaseResult<Vec<Division>>>()?;

        let events = EventLoader::load(&self.root)?;
        let fights = FightLoader::load(&self.root)?;
        let save = SaveLoader::load(&self.root)?;

        let state = WorldState::new(divisions, events, fights, save);

        info!(
            "📂 loaded {}: {} divisions, {} fighters, {} events, {} fights",
            self.root.path().display(),
            state.divisions.len(),
            state.fighters_count(),
            state.events.len(),
            state.fights.len()
        );

        Ok(state)
    }

    fn save_state(&self, state: &WorldState) -> Result<(), Self::Error> {
        self.ensure_global_files()?;

        for (name, division) in &state.divisions {
            FighterLoader::save(&self.root, name, &division.fighters)?;
            PairLoader::save(&self.root, name, &division.pair_history)?;
        }

        EventLoader::save(&self.root, &state.events)?;
        FightLoader::save(&self.root, &state.fights)?;
        SaveLoader::save(&self.root, &state.save)?;

        info!(
            "💾 saved {}: {} events, {} fights, date {}",
            self.root.path().display(),
            state.events.len(),
            state.fights.len(),
            state.save.current_date
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorldGenerator;
    use octagon_core::{LeagueConfig, LeagueSimulator, SaveConfig};

    #[test]
    fn test_fresh_root_loads_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(DataRoot::new(dir.path()));

        let state = store.load_state().unwrap();

        assert_eq!(state.save, SaveConfig::default());
        assert!(state.events.is_empty());
        assert!(store.root().has_save());
    }

    #[test]
    fn test_simulated_world_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(DataRoot::new(dir.path()));

        let mut world = WorldGenerator::generate(&["Flyweight", "Lightweight"], 24, SaveConfig::default()).unwrap();
        for _ in 0..4 {
            LeagueSimulator::simulate_week(&mut world, &LeagueConfig::default()).unwrap();
        }

        store.save_state(&world).unwrap();
        let loaded = store.load_state().unwrap();

        assert_eq!(loaded.save, world.save);
        assert_eq!(loaded.events, world.events);
        assert_eq!(loaded.fights, world.fights);
        assert_eq!(loaded.divisions.keys().collect::<Vec<_>>(), world.divisions.keys().collect::<Vec<_>>());
        for (name, division) in &world.divisions {
            assert_eq!(loaded.divisions[name].fighters, division.fighters);
            assert_eq!(loaded.divisions[name].pair_history, division.pair_history);
        }
    }
}
