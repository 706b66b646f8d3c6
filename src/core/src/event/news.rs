use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteCategory {
    Withdrawal,
    Replacement,
    Cancellation,
    Injury,
    Result,
    TitleChange,
    Announcement,
}

impl NoteCategory {
    /// Categories shown in the condensed news feed.
    pub fn is_headline(&self) -> bool {
        matches!(self, NoteCategory::Injury | NoteCategory::TitleChange)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNote {
    pub category: NoteCategory,
    pub text: String,
}

impl EventNote {
    pub fn new(category: NoteCategory, text: String) -> Self {
        EventNote { category, text }
    }
}

pub struct NewsService;

impl NewsService {
    pub fn withdrawal(name: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Withdrawal,
            format!("⚠️ Withdrawal: {} is out of the bout (injury/illness).", name),
        )
    }

    pub fn replacement(out_name: &str, in_name: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Replacement,
            format!("🔁 Replacement: {} steps in for {}.", in_name, out_name),
        )
    }

    pub fn cancelled(a: &str, b: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Cancellation,
            format!("❌ Bout cancelled: {} vs {} (no replacement found).", a, b),
        )
    }

    pub fn self_bout_rejected() -> EventNote {
        EventNote::new(
            NoteCategory::Cancellation,
            String::from("⚠️ Bout dropped: the same fighter was entered on both sides."),
        )
    }

    pub fn self_bout_cancelled() -> EventNote {
        EventNote::new(
            NoteCategory::Cancellation,
            String::from("⚠️ Bout cancelled: one fighter was booked against themselves."),
        )
    }

    pub fn event_passed(bouts: usize) -> EventNote {
        EventNote::new(
            NoteCategory::Cancellation,
            format!("❌ Event date passed before it was staged: {} bouts called off.", bouts),
        )
    }

    pub fn injury(name: &str, extra_days: i64) -> EventNote {
        let weeks = (extra_days / 7).max(1);
        EventNote::new(
            NoteCategory::Injury,
            format!("🩼 Injury: {} is sidelined for at least {} weeks.", name, weeks),
        )
    }

    pub fn result(winner: &str, loser: &str, method: &str, round: u8, time: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Result,
            format!("✅ Result: {} def. {} ({}, R{} {}).", winner, loser, method, round, time),
        )
    }

    pub fn title_defended(champion: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Result,
            format!("🏆 Title fight over: {} retains the belt.", champion),
        )
    }

    pub fn title_change(new_champ: &str) -> EventNote {
        EventNote::new(
            NoteCategory::TitleChange,
            format!("🏆 New champion: {}!", new_champ),
        )
    }

    pub fn venue(display_name: &str) -> EventNote {
        EventNote::new(NoteCategory::Announcement, format!("📍 {}", display_name))
    }

    pub fn title_fight_announced(division: &str, champion: &str, challenger: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Announcement,
            format!("🏆 Title fight announced ({}): {} vs {}", division, champion, challenger),
        )
    }

    pub fn featured_announced(label: &str, division: &str, a: &str, b: &str) -> EventNote {
        EventNote::new(
            NoteCategory::Announcement,
            format!("📣 {} ({}): {} vs {}", label, division, a, b),
        )
    }

    pub fn full_card_ready() -> EventNote {
        EventNote::new(
            NoteCategory::Announcement,
            String::from("📌 Full fight card confirmed."),
        )
    }
}

/// Injury and title-change notes, in log order.
pub fn headline_notes(notes: &[EventNote]) -> Vec<&EventNote> {
    notes.iter().filter(|note| note.category.is_headline()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injury_weeks_never_below_one() {
        assert!(NewsService::injury("A", 3).text.contains("at least 1 weeks"));
        assert!(NewsService::injury("A", 84).text.contains("at least 12 weeks"));
    }

    #[test]
    fn test_headline_filter() {
        let notes = vec![
            NewsService::withdrawal("A"),
            NewsService::injury("B", 28),
            NewsService::result("C", "D", "U-DEC", 3, "05:00"),
            NewsService::title_change("C"),
            NewsService::full_card_ready(),
        ];

        let headlines = headline_notes(&notes);
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].category, NoteCategory::Injury);
        assert_eq!(headlines[1].category, NoteCategory::TitleChange);
    }
}
