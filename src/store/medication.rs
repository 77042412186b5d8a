//! Medication repository.
//!
//! Medications can only be listed and created.

use super::{Store, allocate_id, required};
use crate::Result;
use crate::models::medication::{CreateMedication, Medication};

/// List all medications in insertion order.
pub fn list_all(store: &Store) -> &[Medication] {
    &store.medications
}

/// Get medication by ID.
pub fn get_by_id(store: &Store, id: u32) -> Option<&Medication> {
    store.medications.iter().find(|m| m.id == id)
}

/// Create a new medication.
pub fn create(store: &mut Store, data: CreateMedication) -> Result<Medication> {
    let name = required(&data.name, "Medication name")?;
    let dosage = required(&data.dosage, "Dosage")?;
    let frequency = required(&data.frequency, "Frequency")?;

    let medication = Medication {
        id: allocate_id(&mut store.medication_ids, "medication")?,
        name,
        dosage,
        frequency,
    };
    store.medications.push(medication.clone());
    Ok(medication)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, dosage: &str, frequency: &str) -> CreateMedication {
        CreateMedication {
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
        }
    }

    #[test]
    fn test_create_medication() {
        let mut store = Store::with_sample_data();
        let med = create(&mut store, data("X", "5mg", "Daily")).unwrap();

        assert_eq!(med.id, 3);
        assert_eq!(med.name, "X");
        assert_eq!(med.dosage, "5mg");
        assert_eq!(med.frequency, "Daily");
        assert_eq!(get_by_id(&store, 3), Some(&med));
    }

    #[test]
    fn test_create_requires_every_field() {
        let mut store = Store::new();

        assert!(create(&mut store, data("", "5mg", "Daily")).unwrap_err().is_validation());
        assert!(create(&mut store, data("X", " ", "Daily")).unwrap_err().is_validation());
        assert!(create(&mut store, data("X", "5mg", "")).unwrap_err().is_validation());
        assert!(list_all(&store).is_empty());
    }

    #[test]
    fn test_rejected_create_does_not_consume_id() {
        let mut store = Store::new();
        let _ = create(&mut store, data("", "", ""));
        let med = create(&mut store, data("A", "1mg", "Weekly")).unwrap();
        assert_eq!(med.id, 1);
    }
}
