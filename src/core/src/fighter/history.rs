use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    #[serde(rename = "d")]
    pub date: NaiveDate,
    #[serde(rename = "r")]
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPoint {
    #[serde(rename = "d")]
    pub date: NaiveDate,
    /// 0 for the champion, `None` while unranked.
    pub rank: Option<u8>,
}

/// Append-only series that keeps only the most recent entries.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedHistory<T> {
    pub fn new() -> Self {
        BoundedHistory {
            items: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut history = Self::new();
        for item in items {
            history.push(item);
        }
        history
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        while self.items.len() > HISTORY_LIMIT {
            self.items.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
