use async_trait::async_trait;
use thiserror::Error;

use crate::lead::DeliveryBody;

/// One delivery attempt: where to POST and what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub endpoint: String,
    pub body: DeliveryBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Sends a lead to the intake endpoint.
///
/// The return type carries no response on purpose: delivery happens in a mode
/// where status and body are opaque, so `Ok(())` only means the request left
/// without a transport-level failure. Dropping the returned future must abort
/// the request; the pipeline relies on that to enforce its timeout.
#[async_trait(?Send)]
pub trait Transport {
    async fn dispatch(&self, request: DeliveryRequest) -> Result<(), TransportError>;
}
