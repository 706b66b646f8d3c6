use crate::loaders::{
    decode_list, format_date, label_of, lenient_flag, lenient_opt_int, optional_date, parse_label, read_json,
    required_date, write_json,
};
use crate::{DataRoot, DatabaseResult};
use octagon_core::{Event, EventKind, EventNote, NoteCategory};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventEntity {
    pub event_id: u32,
    pub event_date: String,
    pub generated_on: String,
    pub announced_main_on: String,
    pub announced_full_on: String,
    #[serde(deserialize_with = "lenient_flag")]
    pub completed: bool,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub main_fight_id: Option<u32>,
    pub event_kind: String,
    pub location: String,
    pub theme_country: String,
    #[serde(alias = "notes_json", deserialize_with = "lenient_notes")]
    pub notes: Vec<EventNote>,
}

impl EventEntity {
    pub fn into_event(self) -> DatabaseResult<Event> {
        let date = required_date("event_date", &self.event_date)?;
        let kind = parse_label(&self.event_kind).unwrap_or_default();
        let theme = Some(self.theme_country.trim().to_string()).filter(|t| !t.is_empty());

        let mut event = Event::new(self.event_id, date, kind, self.location, theme);
        event.generated_on = optional_date("generated_on", &self.generated_on);
        event.announced_main_on = optional_date("announced_main_on", &self.announced_main_on);
        event.announced_full_on = optional_date("announced_full_on", &self.announced_full_on);
        event.completed = self.completed;
        event.main_fight_id = self.main_fight_id;
        event.notes = self.notes;

        Ok(event)
    }

    pub fn from_event(event: &Event) -> Self {
        EventEntity {
            event_id: event.id,
            event_date: format_date(Some(event.date)),
            generated_on: format_date(event.generated_on),
            announced_main_on: format_date(event.announced_main_on),
            announced_full_on: format_date(event.announced_full_on),
            completed: event.completed,
            main_fight_id: event.main_fight_id,
            event_kind: label_of(&event.kind),
            location: event.location.clone(),
            theme_country: event.theme_country.clone().unwrap_or_default(),
            notes: event.notes.clone(),
        }
    }
}

/// Notes are either typed records or plain strings from older saves,
/// inline or JSON-encoded.
fn lenient_notes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<EventNote>, D::Error> {
    let items: Vec<Value> = decode_list(Value::deserialize(deserializer)?);

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(EventNote::new(legacy_category(&text), text)),
            other => serde_json::from_value(other).ok(),
        })
        .collect())
}

fn legacy_category(text: &str) -> NoteCategory {
    let text = text.trim_start();

    if text.starts_with("⚠️") {
        NoteCategory::Withdrawal
    } else if text.starts_with("🔁") {
        NoteCategory::Replacement
    } else if text.starts_with("❌") {
        NoteCategory::Cancellation
    } else if text.starts_with("🩼") {
        NoteCategory::Injury
    } else if text.starts_with("✅") {
        NoteCategory::Result
    } else if text.starts_with("🏆") {
        NoteCategory::TitleChange
    } else {
        NoteCategory::Announcement
    }
}

pub struct EventLoader;

impl EventLoader {
    pub fn load(root: &DataRoot) -> DatabaseResult<Vec<Event>> {
        let entities: Vec<EventEntity> = read_json(&root.events_path())?;
        entities.into_iter().map(EventEntity::into_event).collect()
    }

    pub fn save(root: &DataRoot, events: &[Event]) -> DatabaseResult<()> {
        let entities: Vec<EventEntity> = events.iter().map(EventEntity::from_event).collect();
        write_json(&root.events_path(), &entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use octagon_core::NewsService;

    #[test]
    fn test_legacy_row_with_encoded_notes() {
        let json = r#"{
            "event_id": 4,
            "event_date": "2026-02-07",
            "announced_main_on": "2025-12-13",
            "completed": "0",
            "main_fight_id": "",
            "event_kind": "COUNTRY",
            "location": "Tokyo",
            "theme_country": "Japan",
            "notes_json": "[\"🩼 old injury note\", \"📍 venue\"]"
        }"#;

        let event = serde_json::from_str::<EventEntity>(json).unwrap().into_event().unwrap();

        assert_eq!(event.kind, EventKind::Country);
        assert_eq!(event.theme_country.as_deref(), Some("Japan"));
        assert_eq!(event.announced_main_on, NaiveDate::from_ymd_opt(2025, 12, 13));
        assert_eq!(event.generated_on, None);
        assert!(!event.completed);
        assert_eq!(event.main_fight_id, None);
        assert_eq!(event.notes.len(), 2);
        assert_eq!(event.notes[0].category, NoteCategory::Injury);
        assert_eq!(event.notes[1].category, NoteCategory::Announcement);
    }

    #[test]
    fn test_unknown_kind_defaults_to_fight_night() {
        let entity = EventEntity {
            event_id: 1,
            event_date: String::from("2026-01-03"),
            event_kind: String::from("GALA"),
            ..EventEntity::default()
        };
        assert_eq!(entity.into_event().unwrap().kind, EventKind::FightNight);
    }

    #[test]
    fn test_missing_event_date_is_an_error() {
        assert!(EventEntity::default().into_event().is_err());
    }

    #[test]
    fn test_events_survive_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let root = DataRoot::new(dir.path());

        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let mut event = Event::new(2, date, EventKind::Numbered, String::from("London"), None);
        event.mark_card_generated(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap());
        event.main_fight_id = Some(11);
        event.note(NewsService::title_change("Someone"));

        EventLoader::save(&root, std::slice::from_ref(&event)).unwrap();
        assert_eq!(EventLoader::load(&root).unwrap(), vec![event]);
    }
}
