//! Dashboard controller: session state, form buffers, and the operations
//! the UI triggers.
//!
//! Every operation runs to completion on the UI thread. Data operations are
//! only available after a successful [`Dashboard::login`].

use chrono::{DateTime, Local};

use crate::auth::Credentials;
use crate::config::AppConfig;
use crate::models::{CreateMedication, CreatePatient, CreateReminder, Medication, Patient, Reminder, UpdatePatient};
use crate::store::{self, Store, StoreCounts};
use crate::{AppError, Result};


/// Login state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        email: String,
        since: DateTime<Local>,
    },
}

impl Session {
    /// Whether the admin view is unlocked.
    pub fn is_admin(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}

/// Pending new-medication fields.
#[derive(Debug, Default, Clone)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl MedicationForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn to_create(&self) -> CreateMedication {
        CreateMedication {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency.clone(),
        }
    }
}

/// Pending new-reminder fields.
#[derive(Debug, Default, Clone)]
pub struct ReminderForm {
    /// `None` while "Select medication" is shown.
    pub medication_id: Option<u32>,
    /// `HH:MM` text as typed.
    pub time: String,
}

impl ReminderForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn to_create(&self) -> CreateReminder {
        CreateReminder {
            medication_id: self.medication_id,
            time: self.time.clone(),
        }
    }
}

/// Owns all dashboard state.
pub struct Dashboard {
    store: Store,
    credentials: Credentials,
    session: Session,

    /// Shared by the login form and the add/edit patient form.
    pub email: String,
    pub password: String,
    pub new_medication: MedicationForm,
    pub new_reminder: ReminderForm,
}

impl Dashboard {
    pub fn new(credentials: Credentials, store: Store) -> Self {
        Self {
            store,
            credentials,
            session: Session::default(),
            email: String::new(),
            password: String::new(),
            new_medication: MedicationForm::default(),
            new_reminder: ReminderForm::default(),
        }
    }

    /// Build from configuration, seeding sample records when enabled.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = if config.seed.sample_data {
            Store::with_sample_data()
        } else {
            Store::new()
        };
        Self::new(Credentials::from(&config.admin), store)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Check the login buffers against the admin account.
    ///
    /// On success both buffers are cleared so the shared email field starts
    /// empty in the patient form. On failure the buffers are kept.
    pub fn login(&mut self) -> Result<()> {
        if self.is_admin() {
            tracing::debug!("Login ignored: already logged in");
            return Ok(());
        }

        match self.credentials.verify(&self.email, &self.password) {
            Ok(()) => {
                let email = std::mem::take(&mut self.email);
                self.password.clear();
                tracing::info!(%email, "Admin logged in");
                self.session = Session::LoggedIn {
                    email,
                    since: Local::now(),
                };
                Ok(())
            }
            Err(e) => {
                tracing::warn!(email = %self.email, "Login rejected");
                Err(e)
            }
        }
    }

    /// Add a patient from the email buffer, then clear the buffer.
    pub fn add_patient(&mut self) -> Result<Patient> {
        self.require_admin()?;

        let patient = store::patient::create(
            &mut self.store,
            CreatePatient {
                email: self.email.clone(),
            },
        )
        .inspect_err(|e| tracing::warn!("Add patient rejected: {}", e))?;

        self.email.clear();
        tracing::info!(patient_id = patient.id, "Patient added");
        Ok(patient)
    }

    /// Replace the email of patient `id` with the email buffer.
    ///
    /// The buffer is cleared unless the new email is rejected. An unknown id
    /// leaves the list unchanged and returns [`AppError::NotFound`].
    pub fn edit_patient(&mut self, id: u32) -> Result<Patient> {
        self.require_admin()?;

        let data = UpdatePatient {
            email: self.email.clone(),
        };

        match store::patient::update(&mut self.store, id, data) {
            Ok(patient) => {
                self.email.clear();
                tracing::info!(patient_id = id, "Patient updated");
                Ok(patient)
            }
            Err(e @ AppError::NotFound(_)) => {
                self.email.clear();
                tracing::debug!(patient_id = id, "Edit skipped: no such patient");
                Err(e)
            }
            Err(e) => {
                tracing::warn!(patient_id = id, "Edit patient rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Remove patient `id`. Returns `false` when there was nothing to remove.
    pub fn delete_patient(&mut self, id: u32) -> Result<bool> {
        self.require_admin()?;

        let removed = store::patient::delete(&mut self.store, id);
        if removed {
            tracing::info!(patient_id = id, "Patient deleted");
        } else {
            tracing::debug!(patient_id = id, "Delete skipped: no such patient");
        }
        Ok(removed)
    }

    /// Add a medication from the pending fields, then clear them.
    pub fn add_medication(&mut self) -> Result<Medication> {
        self.require_admin()?;

        let medication = store::medication::create(&mut self.store, self.new_medication.to_create())
            .inspect_err(|e| tracing::warn!("Add medication rejected: {}", e))?;

        self.new_medication.reset();
        tracing::info!(medication_id = medication.id, name = %medication.name, "Medication added");
        Ok(medication)
    }

    /// Add a reminder from the pending fields, then clear them.
    pub fn add_reminder(&mut self) -> Result<Reminder> {
        self.require_admin()?;

        let reminder = store::reminder::create(&mut self.store, self.new_reminder.to_create())
            .inspect_err(|e| tracing::warn!("Add reminder rejected: {}", e))?;

        self.new_reminder.reset();
        tracing::info!(
            reminder_id = reminder.id,
            medication_id = reminder.medication_id,
            time = %reminder.time_label(),
            "Reminder added"
        );
        Ok(reminder)
    }

    pub fn patients(&self) -> &[Patient] {
        store::patient::list_all(&self.store)
    }

    pub fn medications(&self) -> &[Medication] {
        store::medication::list_all(&self.store)
    }

    pub fn reminders(&self) -> &[Reminder] {
        store::reminder::list_all(&self.store)
    }

    /// Name of medication `id`, if it exists.
    pub fn medication_name(&self, id: u32) -> Option<&str> {
        store::medication::get_by_id(&self.store, id).map(|m| m.name.as_str())
    }

    /// `"{name} at {HH:MM}"` for a reminder.
    pub fn reminder_line(&self, reminder: &Reminder) -> String {
        store::reminder::display_line(&self.store, reminder)
    }

    pub fn counts(&self) -> StoreCounts {
        self.store.counts()
    }

    fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }
}
