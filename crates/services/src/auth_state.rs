//! Signup and login form state.
//!
//! Submitting does not lock the form: a second submit while the first is
//! outstanding sends a second request.

use notes_core::model::{LoginForm, SignupForm, UserRef};

use crate::error::{Action, ActionError};
use crate::status::Status;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub form: SignupForm,
    status: Option<Status>,
}

impl SignupState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Snapshot the fields to send and show the in-flight status.
    pub fn begin(&mut self) -> SignupForm {
        self.status = Some(Status::neutral("Creating account..."));
        self.form.clone()
    }

    /// On success the fields are cleared; on failure they are kept.
    pub fn finish(&mut self, outcome: Result<(), ActionError>) {
        match outcome {
            Ok(()) => {
                self.status = Some(Status::success("Account created! Check your email."));
                self.form.reset();
            }
            Err(err) => {
                self.status = Some(Status::error(err.user_message(Action::Signup)));
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub form: LoginForm,
    status: Option<Status>,
}

impl LoginState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn begin(&mut self) -> LoginForm {
        self.status = Some(Status::neutral("Signing in..."));
        self.form.clone()
    }

    /// Returns `true` when the caller should move on to the dashboard.
    pub fn finish(&mut self, outcome: Result<Option<UserRef>, ActionError>) -> bool {
        match outcome {
            Ok(user) => {
                let greeting = user.map_or_else(
                    || "Signed in.".to_string(),
                    |user| format!("Welcome back, {}!", user.name),
                );
                self.status = Some(Status::success(greeting));
                self.form.password.clear();
                true
            }
            Err(err) => {
                self.status = Some(Status::error(err.user_message(Action::Login)));
                false
            }
        }
    }
}
