//! Admin credential check.
//!
//! A literal comparison against the configured account. There is no backend.

use crate::config::AdminConfig;
use crate::{AppError, Result};

/// Credentials accepted by the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check an email/password pair. Both must match exactly.
    pub fn verify(&self, email: &str, password: &str) -> Result<()> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from(&AdminConfig::default())
    }
}

impl From<&AdminConfig> for Credentials {
    fn from(config: &AdminConfig) -> Self {
        Self::new(config.email.trim(), config.password.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let creds = Credentials::default();
        assert!(creds.verify("admin@example.com", "password").is_ok());
    }

    #[test]
    fn test_wrong_pairs_rejected() {
        let creds = Credentials::default();
        for (email, password) in [
            ("admin@example.com", "wrong"),
            ("other@example.com", "password"),
            ("", ""),
            ("ADMIN@example.com", "password"),
            ("admin@example.com ", "password"),
        ] {
            assert!(
                matches!(creds.verify(email, password), Err(AppError::InvalidCredentials)),
                "{email:?}/{password:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_config() {
        let config = AdminConfig {
            email: " nurse@clinic.org ".to_string(),
            password: "s3cret".to_string(),
        };
        let creds = Credentials::from(&config);
        assert!(creds.verify("nurse@clinic.org", "s3cret").is_ok());
        assert!(creds.verify("admin@example.com", "password").is_err());
    }
}
