use crate::error::LoginResult;
use crate::notify::{Notice, Notifier};
use crate::validation::{self, Field, ValidationError};
use parking_lot::Mutex;
use std::time::Duration;

/// Stand-in for the round trip a real sign-in would make.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(700);

/// Everything the login screen remembers between events. Lives and dies with its [`LoginForm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub remember_me: bool,
    pub touched_email: bool,
    pub touched_password: bool,
    pub submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            show_password: false,
            remember_me: true,
            touched_email: false,
            touched_password: false,
            submitting: false,
        }
    }
}

impl FormState {
    pub fn email_error(&self) -> Option<ValidationError> {
        validation::email_error(&self.email, self.touched_email)
    }

    pub fn password_error(&self) -> Option<ValidationError> {
        validation::password_error(&self.password, self.touched_password)
    }

    /// Whether the submit control is enabled.
    ///
    /// Only looks at *displayed* errors, so untouched but invalid fields still allow a submit;
    /// the submit handler re-checks the raw values itself.
    pub fn can_submit(&self) -> bool {
        self.email_error().is_none()
            && self.password_error().is_none()
            && !validation::trim_input(&self.email).is_empty()
            && !self.password.is_empty()
            && !self.submitting
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.touched_email,
            Field::Password => self.touched_password,
        }
    }

    // One way: nothing ever resets a touched flag.
    fn touch(&mut self, field: Field) {
        match field {
            Field::Email => self.touched_email = true,
            Field::Password => self.touched_password = true,
        }
    }
}

/// Synchronous user input on the login screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Blurred(Field),
    PasswordVisibilityToggled,
    RememberMeChanged(bool),
    ForgotPasswordClicked,
    CreateAccountClicked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; its error is now visible.
    Rejected,
    /// A submit is already in flight.
    Busy,
    SignedIn,
}

/// The login view: owns its [`FormState`] and reports through an injected [`Notifier`].
///
/// The state lock is never held across an await, so input keeps flowing while a submit is
/// waiting out [`SIMULATED_LATENCY`].
pub struct LoginForm<N> {
    state: Mutex<FormState>,
    notifier: N,
}

impl<N: Notifier + Send + Sync> LoginForm<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            notifier,
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.lock().clone()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn email_error(&self) -> Option<ValidationError> {
        self.state.lock().email_error()
    }

    pub fn password_error(&self) -> Option<ValidationError> {
        self.state.lock().password_error()
    }

    pub fn can_submit(&self) -> bool {
        self.state.lock().can_submit()
    }

    pub fn apply(&self, event: FormEvent) {
        let mut state = self.state.lock();
        match event {
            FormEvent::EmailChanged(email) => state.email = email,
            FormEvent::PasswordChanged(password) => state.password = password,
            FormEvent::Blurred(field) => state.touch(field),
            FormEvent::PasswordVisibilityToggled => state.show_password = !state.show_password,
            FormEvent::RememberMeChanged(remember_me) => state.remember_me = remember_me,
            link @ (FormEvent::ForgotPasswordClicked | FormEvent::CreateAccountClicked) => {
                tracing::trace!(?link, "Inert link clicked");
            }
        }
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.apply(FormEvent::EmailChanged(email.into()));
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.apply(FormEvent::PasswordChanged(password.into()));
    }

    pub fn blur(&self, field: Field) {
        self.apply(FormEvent::Blurred(field));
    }

    pub fn toggle_password_visibility(&self) {
        self.apply(FormEvent::PasswordVisibilityToggled);
    }

    pub fn set_remember_me(&self, remember_me: bool) {
        self.apply(FormEvent::RememberMeChanged(remember_me));
    }

    /// Runs the sign-in flow.
    ///
    /// Touches both fields, re-validates the raw values, then holds `submitting` for
    /// [`SIMULATED_LATENCY`] and acknowledges with the values captured when the submit started.
    /// `submitting` is released on every exit, including a failed acknowledgement or the
    /// future being dropped.
    pub async fn submit(&self) -> LoginResult<SubmitOutcome> {
        let notice = {
            let mut state = self.state.lock();
            if state.submitting {
                return Ok(SubmitOutcome::Busy);
            }

            state.touch(Field::Email);
            state.touch(Field::Password);

            if let Err(error) = validation::check_email(&state.email)
                .and_then(|()| validation::check_password(&state.password))
            {
                tracing::debug!(%error, field = ?error.field(), "Rejected login submit");
                return Ok(SubmitOutcome::Rejected);
            }

            state.submitting = true;

            Notice::SignedIn {
                email: validation::trim_input(&state.email).to_owned(),
                remember_me: state.remember_me,
            }
        };

        let _release = SubmittingGuard { state: &self.state };

        tracing::debug!("Simulating sign-in round trip");
        tokio::time::sleep(SIMULATED_LATENCY).await;

        self.notifier.notify(notice).await?;

        Ok(SubmitOutcome::SignedIn)
    }

    /// Placeholder for social sign-in. Leaves the form untouched.
    pub async fn continue_with_google(&self) -> LoginResult<()> {
        self.notifier.notify(Notice::SocialLoginPlaceholder).await?;
        Ok(())
    }
}

struct SubmittingGuard<'a> {
    state: &'a Mutex<FormState>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().submitting = false;
    }
}
