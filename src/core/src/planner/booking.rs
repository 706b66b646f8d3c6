use crate::division::Division;
use crate::error::{SimulationError, SimulationResult};
use crate::event::{Event, Fight, NewsService};
use crate::matchmaking::PairKey;
use chrono::NaiveDate;
use log::warn;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Accepts a bout unless it is missing a side or pits a fighter against
/// themselves. A self-bout leaves exactly one note on `event`.
pub fn append_fight(fights: &mut Vec<Fight>, fight: Fight, event: Option<&mut Event>) -> bool {
    if fight.a_id == 0 || fight.b_id == 0 {
        return false;
    }

    if fight.a_id == fight.b_id {
        warn!("⚠️ refused to book fighter {} against themselves", fight.a_id);
        if let Some(event) = event {
            event.note(NewsService::self_bout_rejected());
        }
        return false;
    }

    fights.push(fight);
    true
}

/// Cancels every scheduled self-bout that slipped into stored data.
pub fn cancel_self_fights(events: &mut [Event], fights: &mut [Fight]) -> usize {
    let mut events_by_id: HashMap<u32, &mut Event> = events.iter_mut().map(|e| (e.id, e)).collect();
    let mut cancelled = 0;

    for fight in fights.iter_mut().filter(|f| f.is_self_bout()) {
        if !fight.cancel() {
            continue;
        }

        cancelled += 1;
        warn!("⚠️ fight {} had fighter {} on both sides, cancelled", fight.id, fight.a_id);

        if let Some(event) = events_by_id.get_mut(&fight.event_id) {
            event.note(NewsService::self_bout_cancelled());
        }
    }

    cancelled
}

/// Cancels the scheduled bouts of events dated before `today` that were
/// never run, so their fighters can be booked again.
pub fn release_stranded_fights(events: &mut [Event], fights: &mut [Fight], today: NaiveDate) -> usize {
    let mut released = 0;

    for event in events.iter_mut().filter(|e| !e.completed && e.date < today) {
        let mut bouts = 0;
        for fight in fights.iter_mut().filter(|f| f.event_id == event.id) {
            if fight.cancel() {
                bouts += 1;
            }
        }

        if bouts > 0 {
            warn!("event {} on {} was never run, released {} bouts", event.id, event.date, bouts);
            event.note(NewsService::event_passed(bouts));
            released += bouts;
        }
    }

    released
}

/// Fighters and pairs already holding a scheduled bout in this division
/// at any event other than `current_event_id`.
pub fn booked_ids_and_pairs(
    fights: &[Fight],
    division: &str,
    current_event_id: u32,
) -> (HashSet<u32>, HashSet<PairKey>) {
    let mut ids = HashSet::new();
    let mut pairs = HashSet::new();

    for fight in fights
        .iter()
        .filter(|f| f.is_scheduled() && f.division == division && f.event_id != current_event_id)
    {
        ids.insert(fight.a_id);
        ids.insert(fight.b_id);
        pairs.insert(PairKey::new(fight.a_id, fight.b_id));
    }

    (ids, pairs)
}

/// Everyone on this event's card in the division, whatever the bout status.
pub fn event_used_ids(fights: &[Fight], event_id: u32, division: &str) -> HashSet<u32> {
    fights
        .iter()
        .filter(|f| f.event_id == event_id && f.division == division)
        .flat_map(|f| [f.a_id, f.b_id])
        .collect()
}

pub fn already_scheduled_title(fights: &[Fight], division: &str, champion_id: u32) -> bool {
    fights.iter().any(|f| {
        f.is_scheduled() && f.division == division && f.is_title_fight && f.involves(champion_id)
    })
}

/// Live bouts of the event where both sides are the champion or ranked 1..=8.
pub fn event_top_tier_count(
    fights: &[Fight],
    divisions: &BTreeMap<String, Division>,
    event_id: u32,
) -> SimulationResult<usize> {
    let mut count = 0;

    for fight in fights.iter().filter(|f| f.event_id == event_id && !f.is_cancelled()) {
        let division = divisions
            .get(&fight.division)
            .ok_or_else(|| SimulationError::DivisionNotFound(fight.division.clone()))?;

        if division.is_top_tier_pairing(fight.a_id, fight.b_id)? {
            count += 1;
        }
    }

    Ok(count)
}
