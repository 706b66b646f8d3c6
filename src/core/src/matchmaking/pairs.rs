use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Unordered fighter pair, stored with the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(u32, u32);

impl PairKey {
    pub fn new(a_id: u32, b_id: u32) -> Self {
        if a_id < b_id {
            PairKey(a_id, b_id)
        } else {
            PairKey(b_id, a_id)
        }
    }

    pub fn low(&self) -> u32 {
        self.0
    }

    pub fn high(&self) -> u32 {
        self.1
    }
}

/// Date each pair in a division last fought. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairHistory {
    last_fought: BTreeMap<PairKey, NaiveDate>,
}

impl PairHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_fought(&self, a_id: u32, b_id: u32) -> Option<NaiveDate> {
        self.last_fought.get(&PairKey::new(a_id, b_id)).copied()
    }

    pub fn record(&mut self, a_id: u32, b_id: u32, date: NaiveDate) {
        self.last_fought.insert(PairKey::new(a_id, b_id), date);
    }

    /// True when the pair fought less than `cooldown_days` before `on`.
    pub fn in_cooldown(&self, a_id: u32, b_id: u32, on: NaiveDate, cooldown_days: i64) -> bool {
        self.last_fought(a_id, b_id)
            .is_some_and(|last| (on - last).num_days() < cooldown_days)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &NaiveDate)> {
        self.last_fought.iter()
    }

    pub fn len(&self) -> usize {
        self.last_fought.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_fought.is_empty()
    }
}

impl FromIterator<(u32, u32, NaiveDate)> for PairHistory {
    fn from_iter<T: IntoIterator<Item = (u32, u32, NaiveDate)>>(iter: T) -> Self {
        let mut history = PairHistory::new();
        for (a, b, date) in iter {
            history.record(a, b, date);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_unordered() {
        assert_eq!(PairKey::new(9, 2), PairKey::new(2, 9));
        assert_eq!(PairKey::new(9, 2).low(), 2);
        assert_eq!(PairKey::new(9, 2).high(), 9);
    }

    #[test]
    fn test_record_overwrites_last_date() {
        let first = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let second = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();

        let mut history = PairHistory::new();
        history.record(1, 2, first);
        history.record(2, 1, second);

        assert_eq!(history.len(), 1);
        assert_eq!(history.last_fought(1, 2), Some(second));
    }

    #[test]
    fn test_cooldown_window() {
        let fought = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let history: PairHistory = [(4, 7, fought)].into_iter().collect();

        assert!(history.in_cooldown(7, 4, fought + chrono::Duration::days(209), 210));
        assert!(!history.in_cooldown(7, 4, fought + chrono::Duration::days(210), 210));
        assert!(!history.in_cooldown(1, 4, fought, 210));
    }
}
