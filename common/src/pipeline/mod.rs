//! The lead submission pipeline.
//!
//! One [`LeadPipeline`] per form on the page. A submission runs:
//!
//! 1. normalize the raw fields (trim, escape, strip the phone number);
//! 2. validate name, mobile, then email, stopping at the first failure;
//! 3. enter the loading state;
//! 4. dispatch once, racing the configured timeout;
//! 5. report success (clear the form, schedule the dismissal, emit analytics)
//!    or failure (keep the form, explain what went wrong).
//!
//! Delivery is best-effort: there is no retry and no queue, and the endpoint's
//! response is never looked at.

mod clock;
mod transport;
mod view;

use std::cell::Cell;
use std::time::Duration;

use chrono_tz::Tz;
use futures_util::future::{select, Either};
use log::{debug, info, warn};
use thiserror::Error;

use crate::analytics::{Analytics, AnalyticsEvent, EventName};
use crate::lead::{build_submission, validate, DeliveryBody, NormalizedLead, ValidationError};
use crate::model::lead::{LeadFields, LeadSubmission};
use crate::model::site_config::{ConfigError, FormVariant, SiteConfig};

pub use clock::Clock;
pub use transport::{DeliveryRequest, Transport, TransportError};
pub use view::FormView;

use view::BusyGuard;

/// Why a validated lead did not get out. The `Display` text is shown to the
/// visitor; the transport reason only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Request timed out. Please check your connection and try again.")]
    Timeout,
    #[error("There was an error submitting the form. Please try again or contact us directly.")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Invalid(ValidationError),
    DeliveryFailed(DeliveryError),
    /// A delivery from this form was still outstanding; nothing was done.
    Busy,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

pub struct LeadPipeline<T, C> {
    endpoint: String,
    timeout: Duration,
    dismiss_after: Duration,
    tz: Tz,
    variant: FormVariant,
    page: String,
    transport: T,
    clock: C,
    analytics: Analytics,
    in_flight: Cell<bool>,
}

impl<T: Transport, C: Clock> LeadPipeline<T, C> {
    /// Builds the pipeline for `variant`, resolving its timings against the
    /// site defaults.
    pub fn new(
        site: &SiteConfig,
        variant: FormVariant,
        transport: T,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: site.endpoint_url.clone(),
            timeout: site.timeout_for(&variant),
            dismiss_after: site.dismiss_for(&variant),
            tz: site.tz()?,
            variant,
            page: String::new(),
            transport,
            clock,
            analytics: Analytics::default(),
            in_flight: Cell::new(false),
        })
    }

    /// Sets the originating page URL stamped on every lead.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    pub fn with_analytics(mut self, analytics: Analytics) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn variant(&self) -> &FormVariant {
        &self.variant
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Runs one submission attempt against `view`.
    ///
    /// Never panics and never leaves the form disabled: every return path,
    /// and dropping the returned future, ends with the submit control enabled.
    pub async fn submit<V: FormView + ?Sized>(&self, view: &V, fields: LeadFields) -> Outcome {
        let source = self.variant.source.as_str();
        if self.in_flight.get() {
            debug!("[{source}] submission ignored, a delivery is still outstanding");
            return Outcome::Busy;
        }

        view.clear_messages();

        let lead = NormalizedLead::from_fields(&fields);
        if let Err(err) = validate(&lead) {
            debug!("[{source}] rejected: {err}");
            view.show_invalid(err);
            return Outcome::Invalid(err);
        }

        let submission = build_submission(lead, source, &self.page, self.clock.now(), self.tz);
        let guard = BusyGuard::engage(view, &self.in_flight);

        match self.deliver(&submission).await {
            Ok(()) => {
                info!("[{source}] lead dispatched to {}", self.endpoint);
                view.show_success();
                view.reset_fields();
                drop(guard);
                view.schedule_dismiss(self.dismiss_after, self.variant.in_modal);
                self.analytics
                    .emit(&AnalyticsEvent::new(EventName::FormSubmission, source));
                Outcome::Success
            }
            Err(err) => {
                match &err {
                    DeliveryError::Timeout => {
                        warn!("[{source}] delivery timed out after {:?}", self.timeout);
                    }
                    DeliveryError::Transport(reason) => {
                        warn!("[{source}] delivery failed: {reason}");
                    }
                }
                view.show_error(&err.to_string());
                drop(guard);
                Outcome::DeliveryFailed(err)
            }
        }
    }

    async fn deliver(&self, submission: &LeadSubmission) -> Result<(), DeliveryError> {
        let body = DeliveryBody::encode(submission, self.variant.encoding)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        let request = DeliveryRequest {
            endpoint: self.endpoint.clone(),
            body,
        };

        let dispatch = self.transport.dispatch(request);
        let deadline = self.clock.sleep(self.timeout);

        match select(dispatch, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| DeliveryError::Transport(e.to_string())),
            Either::Right(((), dispatch)) => {
                // Dropping the dispatch future aborts the request.
                drop(dispatch);
                Err(DeliveryError::Timeout)
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
