use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

pub const EVENT_WEEKDAY: Weekday = Weekday::Sat;

/// Events per month, drawn uniformly from this multiset (2 is the usual cadence).
const EVENTS_PER_MONTH: [usize; 5] = [1, 2, 2, 2, 3];

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub main_announce_weeks: i64,
    pub full_generate_weeks: i64,
    pub horizon_weeks: u32,
    pub rematch_cooldown_days: i64,
    pub title_fight_gap_days: i64,
    pub top_tier_bout_limit: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            main_announce_weeks: 8,
            full_generate_weeks: 4,
            horizon_weeks: 12,
            rematch_cooldown_days: 210,
            title_fight_gap_days: 56,
            top_tier_bout_limit: 4,
        }
    }
}

impl PlanConfig {
    pub fn main_announce_date(&self, event_date: NaiveDate) -> NaiveDate {
        event_date - Duration::weeks(self.main_announce_weeks)
    }

    pub fn full_generate_date(&self, event_date: NaiveDate) -> NaiveDate {
        event_date - Duration::weeks(self.full_generate_weeks)
    }
}

pub fn is_event_day(date: NaiveDate) -> bool {
    date.weekday() == EVENT_WEEKDAY
}

/// Smallest date on or after `date` that falls on the event weekday.
pub fn next_saturday(date: NaiveDate) -> NaiveDate {
    let target = EVENT_WEEKDAY.num_days_from_monday() as i64;
    let current = date.weekday().num_days_from_monday() as i64;
    let delta = (target - current).rem_euclid(7);

    date + Duration::days(delta)
}

/// Irregular event cadence over the horizon: every month with Saturdays
/// gets 1 to 3 of them picked at random, sorted ascending.
pub fn event_dates_in_horizon<R: Rng + ?Sized>(
    start: NaiveDate,
    horizon_weeks: u32,
    rng: &mut R,
) -> Vec<NaiveDate> {
    let first = next_saturday(start);

    let mut by_month: BTreeMap<(i32, u32), Vec<NaiveDate>> = BTreeMap::new();
    for week in 0..horizon_weeks {
        let day = first + Duration::weeks(week as i64);
        by_month.entry((day.year(), day.month())).or_default().push(day);
    }

    let mut picks = Vec::new();
    for days in by_month.values() {
        if days.is_empty() {
            continue;
        }

        let count = EVENTS_PER_MONTH
            .choose(rng)
            .copied()
            .unwrap_or(1)
            .min(days.len());

        picks.extend(days.choose_multiple(rng, count).copied());
    }

    picks.sort();
    picks
}
