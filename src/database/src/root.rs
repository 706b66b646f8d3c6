use crate::{DatabaseError, DatabaseResult};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const GLOBAL_DIR: &str = "_global";
pub const DEFAULT_DIVISION: &str = "Flyweight";

const FIGHTERS_FILE: &str = "fighters.json";
const PAIRS_FILE: &str = "pair_history.json";

/// One world on disk. Every load and save goes through an explicit root,
/// so switching worlds is just opening another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRoot {
    path: PathBuf,
}

impl DataRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DataRoot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn global_dir(&self) -> PathBuf {
        self.path.join(GLOBAL_DIR)
    }

    pub fn events_path(&self) -> PathBuf {
        self.global_dir().join("events.json")
    }

    pub fn fights_path(&self) -> PathBuf {
        self.global_dir().join("fights.json")
    }

    pub fn save_path(&self) -> PathBuf {
        self.global_dir().join("save_game.json")
    }

    pub fn division_dir(&self, division: &str) -> PathBuf {
        self.path.join(division)
    }

    pub fn fighters_path(&self, division: &str) -> PathBuf {
        self.division_dir(division).join(FIGHTERS_FILE)
    }

    pub fn pairs_path(&self, division: &str) -> PathBuf {
        self.division_dir(division).join(PAIRS_FILE)
    }

    pub fn has_save(&self) -> bool {
        self.save_path().exists()
    }

    /// Sub-directories holding a roster, sorted by name. A root without
    /// any falls back to a single default division.
    pub fn list_divisions(&self) -> DatabaseResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(vec![DEFAULT_DIVISION.to_string()]);
        }

        let mut divisions = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            if name == GLOBAL_DIR || !entry.path().is_dir() {
                continue;
            }

            if entry.path().join(FIGHTERS_FILE).exists() {
                divisions.push(name);
            }
        }

        divisions.sort();

        if divisions.is_empty() {
            divisions.push(DEFAULT_DIVISION.to_string());
        }

        Ok(divisions)
    }
}

/// Numbered copies of a world under one saves directory.
#[derive(Debug, Clone)]
pub struct SaveSlots {
    root: PathBuf,
}

impl SaveSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SaveSlots { root: root.into() }
    }

    pub fn slot_dir(&self, slot: u32) -> PathBuf {
        self.root.join(format!("save_{}", slot))
    }

    pub fn data_root(&self, slot: u32) -> DataRoot {
        DataRoot::new(self.slot_dir(slot).join("Data"))
    }

    pub fn exists(&self, slot: u32) -> bool {
        self.data_root(slot).has_save()
    }

    /// Starts a slot from a copy of `base`.
    pub fn create(&self, slot: u32, base: &DataRoot, overwrite: bool) -> DatabaseResult<DataRoot> {
        self.prepare(slot, overwrite)?;

        let target = self.data_root(slot);
        copy_dir(base.path(), target.path())?;

        debug!("💾 save slot {} created from {}", slot, base.path().display());

        Ok(target)
    }

    pub fn copy(&self, source: u32, target: u32, overwrite: bool) -> DatabaseResult<DataRoot> {
        let source_root = self.data_root(source);
        if !source_root.path().exists() {
            return Err(DatabaseError::SlotNotFound { slot: source });
        }

        self.prepare(target, overwrite)?;

        let target_root = self.data_root(target);
        copy_dir(source_root.path(), target_root.path())?;

        debug!("💾 save slot {} copied to {}", source, target);

        Ok(target_root)
    }

    fn prepare(&self, slot: u32, overwrite: bool) -> DatabaseResult<()> {
        let dir = self.slot_dir(slot);
        if dir.exists() {
            if !overwrite {
                return Err(DatabaseError::SlotExists { slot });
            }
            fs::remove_dir_all(&dir)?;
        }

        fs::create_dir_all(&dir)?;
        Ok(())
    }
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_divisions_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = DataRoot::new(dir.path());

        for name in ["Welterweight", "Bantamweight", "Empty"] {
            fs::create_dir_all(root.division_dir(name)).unwrap();
        }
        fs::write(root.fighters_path("Welterweight"), "[]").unwrap();
        fs::write(root.fighters_path("Bantamweight"), "[]").unwrap();
        fs::create_dir_all(root.global_dir()).unwrap();

        assert_eq!(root.list_divisions().unwrap(), vec!["Bantamweight", "Welterweight"]);
    }

    #[test]
    fn test_missing_root_falls_back_to_default_division() {
        let dir = tempfile::tempdir().unwrap();
        let root = DataRoot::new(dir.path().join("missing"));
        assert_eq!(root.list_divisions().unwrap(), vec![DEFAULT_DIVISION]);
    }

    #[test]
    fn test_slots_create_and_copy() {
        let dir = tempfile::tempdir().unwrap();
        let base = DataRoot::new(dir.path().join("base"));
        fs::create_dir_all(base.global_dir()).unwrap();
        fs::write(base.save_path(), "{}").unwrap();

        let slots = SaveSlots::new(dir.path().join("saves"));
        assert!(!slots.exists(1));

        slots.create(1, &base, false).unwrap();
        assert!(slots.exists(1));
        assert!(matches!(
            slots.create(1, &base, false),
            Err(DatabaseError::SlotExists { slot: 1 })
        ));

        slots.copy(1, 2, false).unwrap();
        assert!(slots.exists(2));
        assert!(matches!(slots.copy(7, 3, false), Err(DatabaseError::SlotNotFound { slot: 7 })));
    }
}
