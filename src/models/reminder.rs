//! Reminder record and its create DTO.

use chrono::NaiveTime;

/// Time-of-day format used for input and display (24h).
pub const TIME_FORMAT: &str = "%H:%M";

/// A time-of-day reminder to take a medication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: u32,
    /// Id of the medication this reminder refers to.
    pub medication_id: u32,
    pub time: NaiveTime,
}

/// DTO for creating a reminder.
#[derive(Debug, Clone)]
pub struct CreateReminder {
    /// `None` when no medication was picked.
    pub medication_id: Option<u32>,
    /// Raw `HH:MM` text as typed.
    pub time: String,
}

impl Reminder {
    /// Time formatted as `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Parse `HH:MM` time input, tolerating surrounding whitespace.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT).ok()
}
