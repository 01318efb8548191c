//! Capability-checked bridges to the analytics tags a page may load.
//!
//! Neither `gtag` nor `fbq` is guaranteed to exist (ad blockers, consent
//! banners, local builds). Each sink is only registered when its global is a
//! callable function at startup.

use std::ops::Deref;
use std::rc::Rc;

use common::analytics::{Analytics, AnalyticsEvent, AnalyticsSink, EventName};
use gloo_console::warn;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Google tag: `gtag('event', name, params)`.
pub struct GtagSink {
    function: Function,
}

/// Meta pixel: `fbq('track', 'Lead', params)` for submissions,
/// `fbq('trackCustom', name, params)` for everything else.
pub struct PixelSink {
    function: Function,
}

impl GtagSink {
    pub fn detect() -> Option<Self> {
        global_function("gtag").map(|function| Self { function })
    }
}

impl PixelSink {
    pub fn detect() -> Option<Self> {
        global_function("fbq").map(|function| Self { function })
    }
}

impl AnalyticsSink for GtagSink {
    fn name(&self) -> &'static str {
        "gtag"
    }

    fn track(&self, event: &AnalyticsEvent) {
        let result = self.function.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event.name.as_str()),
            &params_object(event),
        );
        if let Err(e) = result {
            warn!("gtag call failed", e);
        }
    }
}

impl AnalyticsSink for PixelSink {
    fn name(&self) -> &'static str {
        "fbq"
    }

    fn track(&self, event: &AnalyticsEvent) {
        let (kind, name) = match event.name {
            EventName::FormSubmission => ("track", "Lead"),
            other => ("trackCustom", other.as_str()),
        };
        let result = self.function.call3(
            &JsValue::NULL,
            &JsValue::from_str(kind),
            &JsValue::from_str(name),
            &params_object(event),
        );
        if let Err(e) = result {
            warn!("fbq call failed", e);
        }
    }
}

/// Registers every analytics tag present on the page.
pub fn detect_analytics() -> Analytics {
    let mut analytics = Analytics::new();
    if let Some(sink) = GtagSink::detect() {
        analytics.register(Rc::new(sink));
    }
    if let Some(sink) = PixelSink::detect() {
        analytics.register(Rc::new(sink));
    }
    analytics
}

/// Shared, cheaply clonable analytics set usable as a Yew property.
#[derive(Clone, Default)]
pub struct AnalyticsHandle(Rc<Analytics>);

impl AnalyticsHandle {
    pub fn new(analytics: Analytics) -> Self {
        Self(Rc::new(analytics))
    }
}

impl Deref for AnalyticsHandle {
    type Target = Analytics;

    fn deref(&self) -> &Analytics {
        &self.0
    }
}

impl PartialEq for AnalyticsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn global_function(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn params_object(event: &AnalyticsEvent) -> JsValue {
    let params = Object::new();
    for (key, value) in event.params() {
        let _ = Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    params.into()
}
