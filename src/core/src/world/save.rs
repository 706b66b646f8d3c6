use crate::calendar::{is_event_day, next_saturday};
use chrono::{Datelike, Duration, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type SimRng = ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 12345;

/// Odd multiplier spreading consecutive day numbers across the seed space.
const DAY_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default()
}

/// Process-wide scalars of one world: clock, id counters and seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveConfig {
    pub current_date: NaiveDate,
    pub next_event_id: u32,
    pub next_fight_id: u32,
    pub last_title_fight_date: Option<NaiveDate>,
    pub random_seed: u64,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            current_date: default_start_date(),
            next_event_id: 1,
            next_fight_id: 1,
            last_title_fight_date: None,
            random_seed: DEFAULT_SEED,
        }
    }
}

impl SaveConfig {
    /// Stream for the current simulated day. Replaying the same day of the
    /// same world draws the same numbers.
    pub fn rng(&self) -> SimRng {
        let day = self.current_date.num_days_from_ce() as u64;
        SimRng::seed_from_u64(self.random_seed ^ day.wrapping_mul(DAY_MIX))
    }

    pub fn reseed(&mut self, seed: u64) {
        self.random_seed = seed;
    }

    pub fn take_event_id(&mut self) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;
        id
    }

    pub fn take_fight_id(&mut self) -> u32 {
        let id = self.next_fight_id;
        self.next_fight_id += 1;
        id
    }

    pub fn title_fight_due(&self, event_date: NaiveDate, gap_days: i64) -> bool {
        match self.last_title_fight_date {
            Some(last) => (event_date - last).num_days() >= gap_days,
            None => true,
        }
    }

    /// Moves the clock to the next Saturday, or a full week on from one.
    pub fn advance_to_next_week(&mut self) -> NaiveDate {
        let today = self.current_date;
        let next = if is_event_day(today) {
            today + Duration::days(7)
        } else {
            next_saturday(today)
        };

        self.current_date = next;
        next
    }
}
