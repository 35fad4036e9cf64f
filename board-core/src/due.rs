//! Ship-date urgency and the date strings shown on task cards.

use chrono::NaiveDate;

use crate::config::BoardConfig;

const CARD_DATE_FORMAT: &str = "%b %d, %Y";
const BADGE_DATE_FORMAT: &str = "%b %d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    NoDueDate,
    Overdue,
    DueSoon,
    DueThisWeek,
    OnTrack,
}

impl DueUrgency {
    pub fn classify(ship_date: Option<NaiveDate>, today: NaiveDate, config: &BoardConfig) -> Self {
        let Some(ship_date) = ship_date else {
            return DueUrgency::NoDueDate;
        };
        let days_left = (ship_date - today).num_days();
        if days_left < 0 {
            DueUrgency::Overdue
        } else if days_left <= config.due_soon_days {
            DueUrgency::DueSoon
        } else if days_left <= config.due_week_days {
            DueUrgency::DueThisWeek
        } else {
            DueUrgency::OnTrack
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DueUrgency::NoDueDate => "due-badge due-none",
            DueUrgency::Overdue => "due-badge due-overdue",
            DueUrgency::DueSoon => "due-badge due-soon",
            DueUrgency::DueThisWeek => "due-badge due-week",
            DueUrgency::OnTrack => "due-badge due-ok",
        }
    }
}

/// "Jun 20, 2024", or "Not set".
pub fn card_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(CARD_DATE_FORMAT).to_string())
        .unwrap_or_else(|| "Not set".to_string())
}

/// "Due Jun 20", or "No due date".
pub fn due_label(ship_date: Option<NaiveDate>) -> String {
    ship_date
        .map(|d| format!("Due {}", d.format(BADGE_DATE_FORMAT)))
        .unwrap_or_else(|| "No due date".to_string())
}
