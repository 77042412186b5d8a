//! Medication record and its create DTO.

/// A medication that reminders can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    pub id: u32,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// DTO for creating a medication.
#[derive(Debug, Clone, Default)]
pub struct CreateMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}
