//! Account-creation client for the external signup service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the gateway reports a transport failure, since account
//! creation is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any completed HTTP exchange, whatever its status, comes back as
//! `Ok(AccountResponse)`. Only failures to complete the exchange (DNS,
//! connection, CORS, body read) surface as `TransportError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use super::types::{AccountResponse, SignupRequest};

/// Fixed account-creation endpoint.
pub const CREATE_ACCOUNT_ENDPOINT: &str = "https://ops-adduser.builtwithdark.com/v3/create-account";

/// External login page linked from the success notice.
pub const LOGIN_URL: &str = "https://login.darklang.com";

/// The request never produced an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Network seam between the signup view-model and the account service.
#[allow(async_fn_in_trait)]
pub trait AccountGateway {
    /// Issue exactly one create-account call for `request`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if no HTTP response was received.
    async fn create_account(&self, request: &SignupRequest) -> Result<AccountResponse, TransportError>;
}

/// `gloo-net` backed gateway posting JSON to an account endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAccountGateway {
    endpoint: String,
}

impl HttpAccountGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAccountGateway {
    fn default() -> Self {
        Self::new(CREATE_ACCOUNT_ENDPOINT)
    }
}

impl AccountGateway for HttpAccountGateway {
    async fn create_account(&self, request: &SignupRequest) -> Result<AccountResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            // `.json()` sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .json(request)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(AccountResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
