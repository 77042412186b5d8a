//! Patient repository with CRUD operations.

use super::{Store, allocate_id};
use crate::models::patient::{CreatePatient, Patient, UpdatePatient};
use crate::{AppError, Result};

/// List all patients in insertion order.
pub fn list_all(store: &Store) -> &[Patient] {
    &store.patients
}

/// Get patient by ID.
pub fn get_by_id(store: &Store, id: u32) -> Option<&Patient> {
    store.patients.iter().find(|p| p.id == id)
}

/// Create a new patient.
pub fn create(store: &mut Store, data: CreatePatient) -> Result<Patient> {
    let email = validate_email(&data.email)?;
    if email_exists(store, &email, None) {
        return Err(AppError::validation(format!("A patient with email '{email}' already exists")));
    }

    let patient = Patient {
        id: allocate_id(&mut store.patient_ids, "patient")?,
        email,
    };
    store.patients.push(patient.clone());
    Ok(patient)
}

/// Update an existing patient.
pub fn update(store: &mut Store, id: u32, data: UpdatePatient) -> Result<Patient> {
    if get_by_id(store, id).is_none() {
        return Err(AppError::not_found(format!("patient {id}")));
    }

    let email = validate_email(&data.email)?;
    if email_exists(store, &email, Some(id)) {
        return Err(AppError::validation(format!("A patient with email '{email}' already exists")));
    }

    let patient = store
        .patients
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("patient {id}")))?;

    patient.email = email;
    Ok(patient.clone())
}

/// Delete a patient by ID.
///
/// Returns `false` when no patient had that id.
pub fn delete(store: &mut Store, id: u32) -> bool {
    let before = store.patients.len();
    store.patients.retain(|p| p.id != id);
    store.patients.len() < before
}

/// Check if a patient email exists (case-insensitive).
pub fn email_exists(store: &Store, email: &str, exclude_id: Option<u32>) -> bool {
    store
        .patients
        .iter()
        .filter(|p| Some(p.id) != exclude_id)
        .any(|p| p.email.eq_ignore_ascii_case(email))
}

/// Trim and sanity-check an email address.
fn validate_email(email: &str) -> Result<String> {
    let email = super::required(email, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::validation(format!("'{email}' is not a valid email address"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_email(store: &mut Store, email: &str) -> Result<Patient> {
        create(
            store,
            CreatePatient {
                email: email.to_string(),
            },
        )
    }

    fn ids(store: &Store) -> Vec<u32> {
        list_all(store).iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let mut store = Store::with_sample_data();
        let patient = create_email(&mut store, "new@example.com").unwrap();

        assert_eq!(patient.id, 3);
        assert_eq!(list_all(&store).len(), 3);
        assert_eq!(list_all(&store).last(), Some(&patient));
    }

    #[test]
    fn test_create_trims_email() {
        let mut store = Store::new();
        let patient = create_email(&mut store, "  a@b.org ").unwrap();
        assert_eq!(patient.email, "a@b.org");
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let mut store = Store::new();

        for bad in ["", "   ", "no-at-sign", "@example.com", "user@"] {
            let err = create_email(&mut store, bad).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {bad:?}");
        }
        assert!(list_all(&store).is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let mut store = Store::with_sample_data();
        let err = create_email(&mut store, "PATIENT1@example.com").unwrap_err();

        assert!(err.is_validation());
        assert_eq!(list_all(&store).len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        // [1, 2] minus 1 leaves one row; a length-based id would collide with 2
        let mut store = Store::with_sample_data();
        assert!(delete(&mut store, 1));
        assert_eq!(ids(&store), vec![2]);

        let patient = create_email(&mut store, "third@example.com").unwrap();

        assert_eq!(patient.id, 3);
        assert_eq!(ids(&store), vec![2, 3]);
    }

    #[test]
    fn test_update_replaces_only_target() {
        let mut store = Store::with_sample_data();
        let updated = update(
            &mut store,
            2,
            UpdatePatient {
                email: "changed@example.com".to_string(),
            },
        )
        .unwrap();

        assert_eq!(updated.email, "changed@example.com");
        assert_eq!(get_by_id(&store, 1).unwrap().email, "patient1@example.com");
        assert_eq!(get_by_id(&store, 2).unwrap().email, "changed@example.com");
    }

    #[test]
    fn test_update_same_email_on_same_patient_is_allowed() {
        let mut store = Store::with_sample_data();
        let result = update(
            &mut store,
            1,
            UpdatePatient {
                email: "patient1@example.com".to_string(),
            },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_missing_patient() {
        let mut store = Store::with_sample_data();
        let before = list_all(&store).to_vec();

        let err = update(
            &mut store,
            99,
            UpdatePatient {
                email: "x@example.com".to_string(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(list_all(&store), before.as_slice());
    }

    #[test]
    fn test_update_rejects_invalid_email() {
        let mut store = Store::with_sample_data();
        let err = update(
            &mut store,
            1,
            UpdatePatient {
                email: "bad".to_string(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(get_by_id(&store, 1).unwrap().email, "patient1@example.com");
    }

    #[test]
    fn test_create_fails_when_ids_exhausted() {
        let mut store = Store::new();
        store.seed(
            vec![Patient {
                id: u32::MAX,
                email: "last@example.com".to_string(),
            }],
            vec![],
            vec![],
        );

        let err = create_email(&mut store, "next@example.com").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ids(&store), vec![u32::MAX]);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = Store::new();
        for email in ["a@x.org", "b@x.org", "c@x.org", "d@x.org"] {
            create_email(&mut store, email).unwrap();
        }

        assert!(delete(&mut store, 2));
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = Store::with_sample_data();
        assert!(!delete(&mut store, 42));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_email_exists_excludes_id() {
        let store = Store::with_sample_data();
        assert!(email_exists(&store, "patient1@example.com", None));
        assert!(!email_exists(&store, "patient1@example.com", Some(1)));
        assert!(email_exists(&store, "patient2@example.com", Some(1)));
    }
}
