use crate::calendar::{PlanConfig, event_dates_in_horizon};
use crate::division::Division;
use crate::error::SimulationResult;
use crate::event::{Event, EventKind};
use crate::planner::{PlanningContext, cancel_self_fights, release_stranded_fights};
use crate::world::WorldState;
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashSet};

const COUNTRY_CITIES: [&str; 10] = [
    "Las Vegas",
    "New York",
    "London",
    "Paris",
    "Abu Dhabi",
    "Singapore",
    "Tokyo",
    "Sydney",
    "Toronto",
    "Mexico City",
];

const REGULAR_VENUES: [&str; 5] = ["Las Vegas", "Apex", "New York", "London", "Paris"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanningResult {
    pub created_events: Vec<u32>,
    pub announced_events: Vec<u32>,
    pub generated_events: Vec<u32>,
    pub cancelled_self_bouts: usize,
    pub released_bouts: usize,
}

pub struct EventPlanner;

impl EventPlanner {
    /// The scheduler sweep for `today`.
    ///
    /// Creates shells for horizon dates without an event, cancels stored
    /// self-bouts, then moves every open event through its announcement
    /// phases: the main event eight weeks out, the full card four weeks out.
    /// Each phase runs at most once per event. Events whose date has passed
    /// without being run are left alone and their bouts are released.
    pub fn ensure_events_planned<R: Rng + ?Sized>(
        world: &mut WorldState,
        today: NaiveDate,
        config: &PlanConfig,
        rng: &mut R,
    ) -> SimulationResult<PlanningResult> {
        let mut result = PlanningResult::default();

        let WorldState {
            divisions,
            events,
            fights,
            save,
        } = world;

        let mut known: HashSet<NaiveDate> = events.iter().map(|e| e.date).collect();

        for date in event_dates_in_horizon(today, config.horizon_weeks, rng) {
            if !known.insert(date) {
                continue;
            }

            let kind = EventKind::random(rng);
            let (location, theme_country) = Self::pick_location_and_theme(divisions, kind, rng);
            let event = Event::new(save.take_event_id(), date, kind, location, theme_country);

            info!("🗓️ event {} planned for {}: {}", event.id, date, event.display_name());

            result.created_events.push(event.id);
            events.push(event);
        }

        result.cancelled_self_bouts = cancel_self_fights(events, fights);
        result.released_bouts = release_stranded_fights(events, fights, today);

        for event in events.iter_mut().filter(|e| !e.completed && e.date >= today) {
            let mut ctx = PlanningContext::new(divisions, fights, save, config);

            if today >= config.main_announce_date(event.date) && !event.is_main_announced() {
                ctx.plan_main_event(event, rng)?;
                event.announced_main_on = Some(today);
                result.announced_events.push(event.id);
            }

            if today >= config.full_generate_date(event.date) && !event.is_card_generated() {
                ctx.fill_full_card(event, rng)?;
                event.mark_card_generated(today);
                result.generated_events.push(event.id);
            }
        }

        debug!(
            "planning sweep at {}: {} created, {} announced, {} generated",
            today,
            result.created_events.len(),
            result.announced_events.len(),
            result.generated_events.len()
        );

        Ok(result)
    }

    /// Venue and, for country specials, a nationality drawn from the rosters.
    pub fn pick_location_and_theme<R: Rng + ?Sized>(
        divisions: &BTreeMap<String, Division>,
        kind: EventKind,
        rng: &mut R,
    ) -> (String, Option<String>) {
        if kind == EventKind::Country {
            let countries: Vec<&str> = divisions.values().flat_map(|d| d.countries()).collect();
            let theme = countries.choose(rng).map(|c| c.to_string());
            let city = COUNTRY_CITIES.choose(rng).copied().unwrap_or(COUNTRY_CITIES[0]);

            return (city.to_string(), theme);
        }

        let venue = REGULAR_VENUES.choose(rng).copied().unwrap_or(REGULAR_VENUES[0]);
        (venue.to_string(), None)
    }
}
