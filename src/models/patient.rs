//! Patient record and DTOs for create and update operations.

/// A patient known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub email: String,
}

/// DTO for creating a patient.
#[derive(Debug, Clone)]
pub struct CreatePatient {
    pub email: String,
}

/// DTO for updating a patient.
#[derive(Debug, Clone)]
pub struct UpdatePatient {
    pub email: String,
}
