//! Submission transport between the editor and the update endpoint.

use miette::Diagnostic;
use thiserror::Error;

use crate::wire::{UpdateRequest, UpdateResponse};

/// Client-to-server communication failure.
///
/// Carries the raw error text for the operator notification; there is no
/// retry machinery behind it.
#[derive(Error, Diagnostic, Debug)]
#[error("Unable to reach the update endpoint: {reason}")]
#[diagnostic(
    code(repotrack::transport),
    help("Check your connection and the endpoint URL, then resubmit")
)]
pub struct TransportError {
    reason: String,
    #[source]
    source: Option<ureq::Error>,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

/// How the editor sends its payload. One outstanding request at a time;
/// implementations do not retry or cancel.
pub trait SubmitTransport {
    fn send(&self, request: &UpdateRequest) -> Result<UpdateResponse, TransportError>;
}

/// Production transport: one JSON POST per submission.
pub struct HttpTransport {
    endpoint_url: String,
}

impl HttpTransport {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }
}

impl SubmitTransport for HttpTransport {
    fn send(&self, request: &UpdateRequest) -> Result<UpdateResponse, TransportError> {
        let mut response = ureq::post(self.endpoint_url.as_str()).send_json(request)?;
        let parsed = response.body_mut().read_json::<UpdateResponse>()?;
        Ok(parsed)
    }
}
