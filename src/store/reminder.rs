//! Reminder repository and display helpers.

use super::{Store, allocate_id, medication};
use crate::models::reminder::{CreateReminder, Reminder, parse_time};
use crate::{AppError, Result};

/// List all reminders in insertion order.
pub fn list_all(store: &Store) -> &[Reminder] {
    &store.reminders
}

/// Create a new reminder.
///
/// The referenced medication must exist.
pub fn create(store: &mut Store, data: CreateReminder) -> Result<Reminder> {
    let medication_id = data
        .medication_id
        .ok_or_else(|| AppError::validation("Select a medication"))?;

    if medication::get_by_id(store, medication_id).is_none() {
        return Err(AppError::not_found(format!("medication {medication_id}")));
    }

    let time = parse_time(&data.time)
        .ok_or_else(|| AppError::validation(format!("'{}' is not a valid time (HH:MM)", data.time.trim())))?;

    let reminder = Reminder {
        id: allocate_id(&mut store.reminder_ids, "reminder")?,
        medication_id,
        time,
    };
    store.reminders.push(reminder.clone());
    Ok(reminder)
}

/// Display line for a reminder: `"{medication name} at {HH:MM}"`.
///
/// The name is left blank when the medication id resolves to nothing.
pub fn display_line(store: &Store, reminder: &Reminder) -> String {
    let name = medication::get_by_id(store, reminder.medication_id)
        .map(|m| m.name.as_str())
        .unwrap_or("");
    format!("{} at {}", name, reminder.time_label())
}
