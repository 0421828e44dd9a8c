//! Wire DTOs for the account-creation service.
//!
//! DESIGN
//! ======
//! Field names match the JSON body the remote endpoint expects, so the struct
//! serializes directly with no rename attributes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Normalized signup payload posted to the account-creation endpoint.
///
/// Built fresh from the form fields on every submission attempt; the email is
/// already lower-cased by the time a value of this type exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Raw outcome of a completed HTTP exchange with the account service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body read as plain text.
    pub body: String,
}

impl AccountResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Only an exact `200` counts as account creation.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}
