use crate::loaders::{format_date, optional_date, read_json, required_date, write_json};
use crate::{DataRoot, DatabaseResult};
use octagon_core::SaveConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveEntity {
    pub current_date: String,
    pub next_event_id: u32,
    pub next_fight_id: u32,
    pub last_title_fight_date: String,
    pub random_seed: u64,
}

impl Default for SaveEntity {
    fn default() -> Self {
        SaveEntity::from_config(&SaveConfig::default())
    }
}

impl SaveEntity {
    pub fn into_config(self) -> DatabaseResult<SaveConfig> {
        Ok(SaveConfig {
            current_date: required_date("current_date", &self.current_date)?,
            next_event_id: self.next_event_id.max(1),
            next_fight_id: self.next_fight_id.max(1),
            last_title_fight_date: optional_date("last_title_fight_date", &self.last_title_fight_date),
            random_seed: self.random_seed,
        })
    }

    pub fn from_config(config: &SaveConfig) -> Self {
        SaveEntity {
            current_date: format_date(Some(config.current_date)),
            next_event_id: config.next_event_id,
            next_fight_id: config.next_fight_id,
            last_title_fight_date: format_date(config.last_title_fight_date),
            random_seed: config.random_seed,
        }
    }
}

pub struct SaveLoader;

impl SaveLoader {
    pub fn load(root: &DataRoot) -> DatabaseResult<SaveConfig> {
        let entity: SaveEntity = read_json(&root.save_path())?;
        entity.into_config()
    }

    pub fn save(root: &DataRoot, config: &SaveConfig) -> DatabaseResult<()> {
        write_json(&root.save_path(), &SaveEntity::from_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use octagon_core::world::{DEFAULT_SEED, default_start_date};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SaveLoader::load(&DataRoot::new(dir.path())).unwrap();

        assert_eq!(config.current_date, default_start_date());
        assert_eq!((config.next_event_id, config.next_fight_id), (1, 1));
        assert_eq!(config.random_seed, DEFAULT_SEED);
        assert_eq!(config.last_title_fight_date, None);
    }

    #[test]
    fn test_partial_file_is_default_filled() {
        let entity: SaveEntity = serde_json::from_str(r#"{"current_date": "2026-05-02", "next_fight_id": 40}"#).unwrap();
        let config = entity.into_config().unwrap();

        assert_eq!(config.current_date, NaiveDate::from_ymd_opt(2026, 5, 2).unwrap());
        assert_eq!(config.next_fight_id, 40);
        assert_eq!(config.next_event_id, 1);
        assert_eq!(config.random_seed, DEFAULT_SEED);
    }

    #[test]
    fn test_config_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let root = DataRoot::new(dir.path());
        let config = SaveConfig {
            current_date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
            next_event_id: 12,
            next_fight_id: 140,
            last_title_fight_date: NaiveDate::from_ymd_opt(2026, 5, 2),
            random_seed: 99,
        };

        SaveLoader::save(&root, &config).unwrap();
        assert_eq!(SaveLoader::load(&root).unwrap(), config);
    }
}
