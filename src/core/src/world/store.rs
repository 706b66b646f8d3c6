use crate::world::WorldState;
use std::cell::RefCell;
use std::convert::Infallible;

/// Load/save contract between the engine and whatever keeps the records.
pub trait StateStore {
    type Error;

    fn load_state(&self) -> Result<WorldState, Self::Error>;

    fn save_state(&self, state: &WorldState) -> Result<(), Self::Error>;
}

/// Keeps one snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    snapshot: RefCell<WorldState>,
}

impl MemoryStateStore {
    pub fn new(state: WorldState) -> Self {
        MemoryStateStore {
            snapshot: RefCell::new(state),
        }
    }
}

impl StateStore for MemoryStateStore {
    type Error = Infallible;

    fn load_state(&self) -> Result<WorldState, Self::Error> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save_state(&self, state: &WorldState) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_state_is_loaded_back() {
        let store = MemoryStateStore::default();

        let mut state = store.load_state().unwrap();
        state.save.next_fight_id = 42;
        store.save_state(&state).unwrap();

        let mut loaded = store.load_state().unwrap();
        assert_eq!(loaded.save.next_fight_id, 42);

        loaded.save.next_fight_id = 7;
        assert_eq!(store.load_state().unwrap().save.next_fight_id, 42);
    }
}
