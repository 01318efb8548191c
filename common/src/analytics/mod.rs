//! Optional analytics collaborators.
//!
//! A page may or may not have a tag manager or pixel loaded. Each one that is
//! present is registered as an [`AnalyticsSink`]; emitting to an empty
//! [`Analytics`] is a silent no-op, and a sink can never fail the caller.

use std::fmt;
use std::rc::Rc;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    FormSubmission,
    CtaClick,
    PhoneClick,
    PageLoad,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::FormSubmission => "form_submission",
            EventName::CtaClick => "cta_click",
            EventName::PhoneClick => "phone_click",
            EventName::PageLoad => "page_load",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: EventName,
    /// Label of the form or page element that triggered the event.
    pub source: String,
    /// Extra attributes beyond `source`, in insertion order.
    pub attributes: Vec<(String, String)>,
}

impl AnalyticsEvent {
    pub fn new(name: EventName, source: impl Into<String>) -> Self {
        Self {
            name,
            source: source.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// `source` followed by the extra attributes.
    pub fn params(&self) -> Vec<(&str, &str)> {
        std::iter::once(("source", self.source.as_str()))
            .chain(self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .collect()
    }
}

pub trait AnalyticsSink {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Forwards the event. Implementations swallow (and log) their own errors.
    fn track(&self, event: &AnalyticsEvent);
}

/// The set of analytics sinks detected on the page.
#[derive(Clone, Default)]
pub struct Analytics {
    sinks: Vec<Rc<dyn AnalyticsSink>>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Rc<dyn AnalyticsSink>) {
        debug!("analytics sink registered: {}", sink.name());
        self.sinks.push(sink);
    }

    pub fn with_sink(mut self, sink: Rc<dyn AnalyticsSink>) -> Self {
        self.register(sink);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn emit(&self, event: &AnalyticsEvent) {
        for sink in &self.sinks {
            sink.track(event);
        }
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sinks.iter().map(|s| s.name()))
            .finish()
    }
}
