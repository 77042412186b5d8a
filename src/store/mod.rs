//! In-memory record store with per-entity CRUD operations.
//!
//! Nothing here outlives the process. Each entity kind draws ids from its own
//! [`IdSequence`], so an id is never handed out twice even after deletions.

pub mod medication;
pub mod patient;
pub mod reminder;

use chrono::NaiveTime;

use crate::models::{Medication, Patient, Reminder};

/// Monotonic id source for one entity kind.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// Hand out the next id. The first id is 1; `None` once `u32::MAX` is used.
    pub fn next_id(&mut self) -> Option<u32> {
        let id = self.last.checked_add(1)?;
        self.last = id;
        Some(id)
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: u32) {
        self.last = self.last.max(id);
    }
}

/// All dashboard records.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) patients: Vec<Patient>,
    pub(crate) medications: Vec<Medication>,
    pub(crate) reminders: Vec<Reminder>,
    pub(crate) patient_ids: IdSequence,
    pub(crate) medication_ids: IdSequence,
    pub(crate) reminder_ids: IdSequence,
}

/// Record counts for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub patients: usize,
    pub medications: usize,
    pub reminders: usize,
}

impl Store {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the sample records.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.seed(
            vec![
                Patient {
                    id: 1,
                    email: "patient1@example.com".to_string(),
                },
                Patient {
                    id: 2,
                    email: "patient2@example.com".to_string(),
                },
            ],
            vec![
                Medication {
                    id: 1,
                    name: "Medication 1".to_string(),
                    dosage: "10mg".to_string(),
                    frequency: "Daily".to_string(),
                },
                Medication {
                    id: 2,
                    name: "Medication 2".to_string(),
                    dosage: "20mg".to_string(),
                    frequency: "Twice a day".to_string(),
                },
            ],
            vec![
                Reminder {
                    id: 1,
                    medication_id: 1,
                    time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
                },
                Reminder {
                    id: 2,
                    medication_id: 2,
                    time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
                },
            ],
        );
        store
    }

    /// Load records verbatim, advancing each id sequence past the loaded ids.
    ///
    /// Seeded rows bypass validation; reminders may point at medications that
    /// do not exist.
    pub fn seed(&mut self, patients: Vec<Patient>, medications: Vec<Medication>, reminders: Vec<Reminder>) {
        for p in &patients {
            self.patient_ids.observe(p.id);
        }
        for m in &medications {
            self.medication_ids.observe(m.id);
        }
        for r in &reminders {
            self.reminder_ids.observe(r.id);
        }
        self.patients.extend(patients);
        self.medications.extend(medications);
        self.reminders.extend(reminders);
    }

    /// Number of records of each kind.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            patients: self.patients.len(),
            medications: self.medications.len(),
            reminders: self.reminders.len(),
        }
    }
}

/// Next id from `seq`, or a validation error once the id space is used up.
pub(crate) fn allocate_id(seq: &mut IdSequence, kind: &str) -> crate::Result<u32> {
    seq.next_id()
        .ok_or_else(|| crate::AppError::validation(format!("No {kind} ids left")))
}

/// Trim a required text field, rejecting blank input.
pub(crate) fn required(value: &str, field: &str) -> crate::Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(crate::AppError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_starts_at_one() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), Some(1));
        assert_eq!(seq.next_id(), Some(2));
    }

    #[test]
    fn test_id_sequence_observe_never_goes_back() {
        let mut seq = IdSequence::default();
        seq.observe(10);
        seq.observe(3);
        assert_eq!(seq.next_id(), Some(11));
    }

    #[test]
    fn test_id_sequence_exhausted_at_max() {
        let mut seq = IdSequence::default();
        seq.observe(u32::MAX);
        assert_eq!(seq.next_id(), None);
        assert_eq!(seq.next_id(), None);
    }

    #[test]
    fn test_allocate_id_reports_exhaustion() {
        let mut seq = IdSequence::default();
        seq.observe(u32::MAX);
        let err = allocate_id(&mut seq, "patient").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: No patient ids left");
    }

    #[test]
    fn test_sample_data_counts() {
        let mut store = Store::with_sample_data();
        assert_eq!(
            store.counts(),
            StoreCounts {
                patients: 2,
                medications: 2,
                reminders: 2,
            }
        );
        assert_eq!(store.patient_ids.next_id(), Some(3));
        assert_eq!(store.medication_ids.next_id(), Some(3));
        assert_eq!(store.reminder_ids.next_id(), Some(3));
    }

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("  10mg ", "Dosage").unwrap(), "10mg");
        let err = required("   ", "Dosage").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Dosage is required");
    }
}
