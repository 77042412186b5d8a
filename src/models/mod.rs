//! Data models for patients, medications, and reminders.

pub mod medication;
pub mod patient;
pub mod reminder;

pub use medication::{CreateMedication, Medication};
pub use patient::{CreatePatient, Patient, UpdatePatient};
pub use reminder::{CreateReminder, Reminder, TIME_FORMAT, parse_time};
