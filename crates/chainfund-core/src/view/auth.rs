//! Login and registration forms.
//!
//! There is no account service: a complete form is accepted and the user is
//! sent onward.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::action::{reject, require_filled, ActionOutcome, Destination, Navigation};
use crate::error::ValidationError;
use crate::notify::{Notification, Notifier};

/// Fields of the login page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Accept any complete form and go to the dashboard
    pub fn submit(&mut self, notifier: &dyn Notifier) -> ActionOutcome {
        if let Err(e) = require_filled(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
        ]) {
            return reject(notifier, "Missing Information", &e);
        }

        info!(email = %self.email, "login");
        notifier.notify(Notification::success(
            "Logged In",
            format!("Welcome back, {}!", self.name.trim()),
        ));
        self.password.clear();
        ActionOutcome::completed_then(Navigation::now(Destination::Dashboard))
    }

    /// Pretend to mail a reset link
    pub fn forgot_password(&self, notifier: &dyn Notifier) -> ActionOutcome {
        if let Err(e) = require_filled(&[("Email", self.email.as_str())]) {
            return reject(notifier, "Missing Information", &e);
        }
        notifier.notify(Notification::success(
            "Reset Link Sent",
            format!("Check {} for a password reset link.", self.email.trim()),
        ));
        ActionOutcome::completed()
    }
}

/// Where a one-time code is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpChannel {
    Email,
    Mobile,
}

/// Fields of the registration page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub retype_password: String,
}

impl RegisterForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require_filled(&[
            ("Name", self.name.as_str()),
            ("Phone Number", self.phone.as_str()),
            ("Email", self.email.as_str()),
            ("Address", self.address.as_str()),
            ("Password", self.password.as_str()),
            ("Retype Password", self.retype_password.as_str()),
        ])?;
        if self.password != self.retype_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Accept a complete form with matching passwords and continue to the
    /// wallet step. Anything else stays on the page.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> ActionOutcome {
        if let Err(e) = self.validate() {
            return reject(notifier, "Registration Failed", &e);
        }

        info!(email = %self.email, "registration accepted");
        notifier.notify(Notification::success(
            "Account Created",
            "Connect a wallet to finish setting up your account.",
        ));
        self.password.clear();
        self.retype_password.clear();
        ActionOutcome::completed_then(Navigation::now(Destination::WalletConnect))
    }

    /// Pretend to send a verification code to the phone or email entered
    pub fn send_otp(&self, channel: OtpChannel, notifier: &dyn Notifier) -> ActionOutcome {
        let target = match channel {
            OtpChannel::Email => require_filled(&[("Email", self.email.as_str())])
                .map(|_| self.email.trim()),
            OtpChannel::Mobile => require_filled(&[("Phone Number", self.phone.as_str())])
                .map(|_| self.phone.trim()),
        };
        match target {
            Ok(target) => {
                info!(?channel, "otp requested");
                notifier.notify(Notification::success(
                    "Verification Code Sent",
                    format!("We sent a one-time code to {target}."),
                ));
                ActionOutcome::completed()
            }
            Err(e) => reject(notifier, "Missing Information", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;

    fn complete_registration() -> RegisterForm {
        RegisterForm {
            name: "Ada Lovelace".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            password: "engine".to_string(),
            retype_password: "engine".to_string(),
        }
    }

    #[test]
    fn test_login_requires_all_fields() {
        let log = NotificationLog::new();
        let mut form = LoginForm {
            name: "Ada".to_string(),
            email: String::new(),
            password: "x".to_string(),
        };
        assert_eq!(form.submit(&log), ActionOutcome::Rejected);
        assert_eq!(log.last().unwrap().description, "Email is required");
    }

    #[test]
    fn test_login_goes_to_dashboard() {
        let log = NotificationLog::new();
        let mut form = LoginForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let outcome = form.submit(&log);
        assert_eq!(
            outcome.navigation(),
            Some(Navigation::now(Destination::Dashboard))
        );
        assert_eq!(log.last().unwrap().description, "Welcome back, Ada!");
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_forgot_password_needs_email() {
        let log = NotificationLog::new();
        assert!(!LoginForm::default().forgot_password(&log).is_completed());
        assert_eq!(log.errors(), 1);
    }

    #[test]
    fn test_register_password_mismatch_blocks() {
        let log = NotificationLog::new();
        let mut form = RegisterForm {
            retype_password: "engines".to_string(),
            ..complete_registration()
        };
        let outcome = form.submit(&log);
        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(outcome.navigation(), None);
        assert_eq!(log.last().unwrap().description, "Passwords don't match");
        assert_eq!(form.password, "engine");
    }

    #[test]
    fn test_register_navigates_to_wallet_connect() {
        let log = NotificationLog::new();
        let mut form = complete_registration();
        let outcome = form.submit(&log);
        assert_eq!(
            outcome.navigation(),
            Some(Navigation::now(Destination::WalletConnect))
        );
        assert_eq!(log.successes(), 1);
    }

    #[test]
    fn test_register_empty_fields_rejected() {
        let log = NotificationLog::new();
        let mut form = RegisterForm::default();
        assert_eq!(form.submit(&log), ActionOutcome::Rejected);
        assert_eq!(log.last().unwrap().description, "Name is required");
    }

    #[test]
    fn test_send_otp() {
        let log = NotificationLog::new();
        let form = complete_registration();
        assert!(form.send_otp(OtpChannel::Email, &log).is_completed());
        assert_eq!(
            log.last().unwrap().description,
            "We sent a one-time code to ada@example.com."
        );

        let blank = RegisterForm::default();
        assert!(!blank.send_otp(OtpChannel::Mobile, &log).is_completed());
        assert_eq!(log.last().unwrap().description, "Phone Number is required");
    }

    #[test]
    fn test_form_serializes() {
        let json = serde_json::to_value(complete_registration()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
    }
}
