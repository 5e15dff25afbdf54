//! Registration form controller
//!
//! Owns the form state and runs the submit sequence:
//! snapshot the inputs, POST them, parse the reply, then either establish
//! the session and navigate, or show the service's error message.
//! Transport and parse failures are logged and reported to the caller,
//! never shown to the user.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::RegistrationError;
use super::guard::{SubmissionToken, SubmitGuard, SubmitPolicy};
use super::input::{Field, RegistrationInput};
use super::response::{RegisterResponse, ResponseVerdict};
use crate::core::config::Config;
use crate::core::navigator::{AUTHENTICATED_LANDING_ROUTE, Navigator};
use crate::core::session::{LoginState, Session, SessionContext, SessionStore};
use crate::core::transport::AuthTransport;

/// Where the controller is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// At least one request is in flight
    Submitting,
    /// A registration succeeded and nothing is in flight.
    ///
    /// Sticky: a rejection applied later (only possible under
    /// [`SubmitPolicy::Unguarded`]) sets the error message but leaves the
    /// established session, and this phase, in place.
    Registered,
}

/// Result of one submit attempt, returned to the caller.
///
/// Only `Registered` and `Rejected` have user-visible effects. Whether a
/// `Failed` outcome should also be shown is left to the UI; the form
/// currently keeps it silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session established and navigation requested
    Registered(Session),
    /// The service declined; the message is now the form's error
    Rejected(String),
    /// The exchange itself failed
    Failed(RegistrationError),
    /// The response carried neither a token nor an error
    NoOp,
    /// Another submit is in flight and the policy refuses overlap
    Busy,
    /// A newer submit started before this one completed; result dropped
    Superseded,
}

impl SubmitOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, SubmitOutcome::Registered(_))
    }
}

#[derive(Debug, Default)]
struct FormState {
    input: RegistrationInput,
    error_message: String,
}

struct Shared<T, S, L, N> {
    register_url: String,
    transport: T,
    session: SessionContext<S, L>,
    navigator: N,
    form: Mutex<FormState>,
    guard: SubmitGuard,
    // Serializes result application between overlapping completions
    commit: Mutex<()>,
    registered: AtomicBool,
}

/// Registration form controller.
///
/// Cloning is cheap and clones share state, so a clone can be moved into
/// a spawned task while the form keeps editing the same inputs.
pub struct RegistrationController<T, S, L, N> {
    shared: Arc<Shared<T, S, L, N>>,
}

impl<T, S, L, N> Clone for RegistrationController<T, S, L, N> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, S, L, N> RegistrationController<T, S, L, N>
where
    T: AuthTransport,
    S: SessionStore,
    L: LoginState,
    N: Navigator,
{
    /// Create a controller that refuses overlapping submits.
    pub fn new(
        config: &Config,
        transport: T,
        session: SessionContext<S, L>,
        navigator: N,
    ) -> Self {
        Self::with_policy(config, transport, session, navigator, SubmitPolicy::default())
    }

    pub fn with_policy(
        config: &Config,
        transport: T,
        session: SessionContext<S, L>,
        navigator: N,
        policy: SubmitPolicy,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                register_url: config.register_url(),
                transport,
                session,
                navigator,
                form: Mutex::new(FormState::default()),
                guard: SubmitGuard::new(policy),
                commit: Mutex::new(()),
                registered: AtomicBool::new(false),
            }),
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.shared.guard.policy()
    }

    /// Replace one input. Does not touch the error message.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        tracing::trace!(%field, "registration field updated");
        self.form().input.set(field, value);
    }

    pub fn field(&self, field: Field) -> String {
        self.form().input.get(field).to_string()
    }

    /// Snapshot of all four inputs
    pub fn input(&self) -> RegistrationInput {
        self.form().input.clone()
    }

    /// Current inline error; empty when none is shown
    pub fn error_message(&self) -> String {
        self.form().error_message.clone()
    }

    pub fn phase(&self) -> Phase {
        if self.shared.guard.in_flight() > 0 {
            Phase::Submitting
        } else if self.shared.registered.load(Ordering::SeqCst) {
            Phase::Registered
        } else {
            Phase::Idle
        }
    }

    /// Submit the current inputs.
    ///
    /// Never fails: every way the attempt can end is described by the
    /// returned [`SubmitOutcome`].
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(token) = self.shared.guard.begin() else {
            tracing::debug!("registration already in flight, submit ignored");
            return SubmitOutcome::Busy;
        };

        let input = self.input();
        tracing::debug!(submission = token.id(), "submitting registration");

        match self.exchange(&input).await {
            Ok(verdict) => self.apply(&token, &input, verdict),
            Err(err) => {
                tracing::warn!(
                    submission = token.id(),
                    error = %err,
                    "registration request failed"
                );
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn exchange(
        &self,
        input: &RegistrationInput,
    ) -> Result<ResponseVerdict, RegistrationError> {
        let body = serde_json::to_string(input)
            .map_err(|e| RegistrationError::Serialization(e.to_string()))?;

        let text = self
            .shared
            .transport
            .post_json(&self.shared.register_url, body)
            .await?;

        Ok(RegisterResponse::from_body(&text)?.verdict())
    }

    fn apply(
        &self,
        token: &SubmissionToken<'_>,
        input: &RegistrationInput,
        verdict: ResponseVerdict,
    ) -> SubmitOutcome {
        let _commit = self
            .shared
            .commit
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.shared.guard.may_apply(token) {
            tracing::debug!(submission = token.id(), "stale registration response dropped");
            return SubmitOutcome::Superseded;
        }

        match verdict {
            ResponseVerdict::Accepted { auth_token, email } => {
                let session = Session {
                    auth_token,
                    display_name: input.first_name.clone(),
                    email,
                    is_logged_in: true,
                };
                self.shared.session.establish(&session);
                self.shared.registered.store(true, Ordering::SeqCst);
                self.shared.navigator.go_to(AUTHENTICATED_LANDING_ROUTE);
                tracing::info!(submission = token.id(), "registration succeeded");
                SubmitOutcome::Registered(session)
            }
            ResponseVerdict::Rejected(message) => {
                tracing::debug!(submission = token.id(), "registration rejected by service");
                self.form().error_message = message.clone();
                SubmitOutcome::Rejected(message)
            }
            ResponseVerdict::Unrecognized => {
                tracing::debug!(
                    submission = token.id(),
                    "registration response had neither token nor error"
                );
                SubmitOutcome::NoOp
            }
        }
    }

    fn form(&self) -> MutexGuard<'_, FormState> {
        self.shared
            .form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
