use crate::event::EventNote;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PROMOTION: &str = "UFC";
const NUMBERED_OFFSET: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    #[default]
    FightNight,
    Numbered,
    Country,
}

impl EventKind {
    /// 55% fight night, 30% numbered, 15% country special.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f64 = rng.gen_range(0.0..1.0);
        if roll < 0.55 {
            EventKind::FightNight
        } else if roll < 0.85 {
            EventKind::Numbered
        } else {
            EventKind::Country
        }
    }

    pub fn title_fight_chance(&self) -> f64 {
        match self {
            EventKind::Numbered => 0.38,
            EventKind::Country => 0.25,
            EventKind::FightNight => 0.18,
        }
    }

    /// Chance a free card slot goes to a ranked pairing.
    pub fn top_fight_chance(&self) -> f64 {
        match self {
            EventKind::Numbered => 0.65,
            EventKind::Country => 0.55,
            EventKind::FightNight => 0.45,
        }
    }

    pub fn has_co_main(&self) -> bool {
        matches!(self, EventKind::Numbered)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub date: NaiveDate,
    pub kind: EventKind,
    pub location: String,
    pub theme_country: Option<String>,

    pub announced_main_on: Option<NaiveDate>,
    pub generated_on: Option<NaiveDate>,
    pub announced_full_on: Option<NaiveDate>,
    pub completed: bool,

    pub main_fight_id: Option<u32>,
    pub notes: Vec<EventNote>,
}

impl Event {
    pub fn new(id: u32, date: NaiveDate, kind: EventKind, location: String, theme_country: Option<String>) -> Self {
        Event {
            id,
            date,
            kind,
            location,
            theme_country,
            announced_main_on: None,
            generated_on: None,
            announced_full_on: None,
            completed: false,
            main_fight_id: None,
            notes: Vec::new(),
        }
    }

    pub fn note(&mut self, note: EventNote) {
        self.notes.push(note);
    }

    pub fn is_main_announced(&self) -> bool {
        self.announced_main_on.is_some()
    }

    pub fn is_card_generated(&self) -> bool {
        self.generated_on.is_some()
    }

    pub fn mark_card_generated(&mut self, on: NaiveDate) {
        self.generated_on = Some(on);
        self.announced_full_on = Some(on);
    }

    pub fn display_name(&self) -> String {
        let location = self.location.trim();
        let theme = self.theme_country.as_deref().map(str::trim).unwrap_or_default();

        let mut name = match self.kind {
            EventKind::Numbered => format!("{} {}", PROMOTION, NUMBERED_OFFSET + self.id),
            EventKind::Country | EventKind::FightNight => format!("{} Fight Night", PROMOTION),
        };

        if !location.is_empty() {
            name = format!("{}: {}", name, location);
        }

        if self.kind == EventKind::Country && !theme.is_empty() {
            name = format!("{} ({} special)", name, theme);
        }

        name
    }
}
