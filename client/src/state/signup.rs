//! Signup form view-model and submission state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signup form component owns one `RwSignal<SignupState>`. Inputs write
//! into `fields`, the submit handler drives `begin_submit` / `finish_submit`
//! around a single `AccountGateway` call, and the view renders from `phase`
//! and `errors`. Nothing here touches the DOM or the network directly.
//!
//! STATE MACHINE
//! =============
//! `Idle --submit, consent--> Pending --200--> Success` (terminal).
//! `Pending --non-200 or transport failure--> Idle` with errors shown.
//! `Idle --submit, no consent--> Idle` with a single error shown.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::account::{AccountGateway, TransportError};
use crate::net::types::{AccountResponse, SignupRequest};

pub const CONSENT_REQUIRED_MESSAGE: &str = "Please agree to our code of conduct";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the signup service. Please check your connection and try again.";

/// Why a submission attempt ended without creating an account.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("{}", CONSENT_REQUIRED_MESSAGE)]
    ConsentRequired,
    /// Non-200 response; the body text is the user-facing message.
    #[error("{body}")]
    Rejected { status: u16, body: String },
    /// Detail is kept for logging; users see a generic message.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Transport(String),
}

impl SignupError {
    /// Classify a completed exchange. `None` means the account was created.
    pub fn from_response(response: AccountResponse) -> Option<Self> {
        if response.is_success() {
            None
        } else {
            Some(Self::Rejected { status: response.status, body: response.body })
        }
    }
}

impl From<TransportError> for SignupError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.0)
    }
}

/// Current values of the signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub username: String,
    /// Code-of-conduct checkbox.
    pub consent: bool,
}

impl SignupFields {
    /// Snapshot the text inputs into a request, lower-casing the email.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.to_lowercase(),
            username: self.username.clone(),
        }
    }
}

/// Ordered error messages shown above the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    /// Replace the current messages; never appends.
    pub fn replace<I, S>(&mut self, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.clear();
        self.0.extend(errors.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Lifecycle of the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    /// A create-account call is in flight; further submits are ignored.
    Pending,
    /// Account created. The form body is replaced by the success notice.
    Success,
}

/// Signup form state: inputs, phase, and the visible error list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub fields: SignupFields,
    pub phase: SignupPhase,
    pub errors: ErrorList,
}

impl SignupState {
    /// Show `errors`, discarding whatever was displayed before.
    pub fn show_errors<I, S>(&mut self, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.replace(errors);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Whether the error region should be visible.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SignupPhase::Pending
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SignupPhase::Success
    }

    /// Start a submission attempt.
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// a call is already pending, the form already succeeded, or consent is
    /// missing (in which case the consent error is shown).
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.phase != SignupPhase::Idle {
            return None;
        }
        if !self.fields.consent {
            self.fail(&SignupError::ConsentRequired);
            return None;
        }
        self.phase = SignupPhase::Pending;
        Some(self.fields.to_request())
    }

    /// Apply the gateway outcome of the pending attempt.
    ///
    /// Ignored unless a submission is pending.
    pub fn finish_submit(&mut self, outcome: Result<AccountResponse, TransportError>) {
        if self.phase != SignupPhase::Pending {
            return;
        }
        let failure = match outcome {
            Ok(response) => SignupError::from_response(response),
            Err(err) => Some(SignupError::from(err)),
        };
        match failure {
            None => {
                self.fields = SignupFields::default();
                self.clear_errors();
                self.phase = SignupPhase::Success;
            }
            Some(err) => {
                self.phase = SignupPhase::Idle;
                self.fail(&err);
            }
        }
    }

    fn fail(&mut self, err: &SignupError) {
        self.show_errors([err.to_string()]);
    }
}

/// Run one full submission against `gateway` without a UI.
///
/// Returns the phase the form ends up in.
pub async fn submit_signup<G: AccountGateway>(state: &mut SignupState, gateway: &G) -> SignupPhase {
    let Some(request) = state.begin_submit() else {
        return state.phase;
    };
    let outcome = gateway.create_account(&request).await;
    state.finish_submit(outcome);
    state.phase
}
