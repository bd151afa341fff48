//! Login gate.
//!
//! Submitting the form is the whole of authentication: nothing is checked
//! against a store and there is no logout. The password is accepted only
//! because the form requires it and is dropped straight away.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use farmconnect_core::{Email, EmailError};

/// Login form data.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Errors from submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// A required form field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email field does not look like an email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Whether the login form has been submitted, and with which email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    email: Option<Email>,
}

impl SessionState {
    /// Accept a login form submission.
    ///
    /// Logging in again replaces the stored email.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` if either field is blank or the email is
    /// malformed. The session is left unchanged on error.
    pub fn login(&mut self, form: &LoginForm) -> Result<&Email, LoginError> {
        if form.email.trim().is_empty() {
            return Err(LoginError::MissingField("email"));
        }
        if form.password.expose_secret().is_empty() {
            return Err(LoginError::MissingField("password"));
        }

        let email = Email::parse(&form.email)?;
        Ok(self.email.insert(email))
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.email.is_some()
    }

    /// The email given at login, if logged in.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }
}
