use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures_util::FutureExt;

use crate::analytics::AnalyticsSink;
use crate::model::site_config::{FeedbackStyle, PayloadEncoding};

// =============================================================================
// fakes
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Event {
    ClearMessages,
    Invalid(ValidationError),
    Busy(bool),
    Dispatch,
    Success,
    Error(String),
    Reset,
    Dismiss(Duration, bool),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct RecordingView {
    log: Log,
    busy: Cell<bool>,
}

impl RecordingView {
    fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            busy: Cell::new(false),
        }
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl FormView for RecordingView {
    fn clear_messages(&self) {
        self.push(Event::ClearMessages);
    }

    fn show_invalid(&self, error: ValidationError) {
        self.push(Event::Invalid(error));
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        self.push(Event::Busy(busy));
    }

    fn show_success(&self) {
        self.push(Event::Success);
    }

    fn show_error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn reset_fields(&self) {
        self.push(Event::Reset);
    }

    fn schedule_dismiss(&self, after: Duration, close_modal: bool) {
        self.push(Event::Dismiss(after, close_modal));
    }
}

#[derive(Clone)]
enum Behaviour {
    /// The request goes out; whatever the server says is invisible.
    Dispatched,
    Fail(&'static str),
    Hang,
    Delay(Duration),
}

struct FakeTransport {
    log: Log,
    behaviour: Behaviour,
    requests: RefCell<Vec<DeliveryRequest>>,
}

impl FakeTransport {
    fn new(log: &Log, behaviour: Behaviour) -> Self {
        Self {
            log: log.clone(),
            behaviour,
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for Rc<FakeTransport> {
    async fn dispatch(&self, request: DeliveryRequest) -> Result<(), TransportError> {
        self.log.borrow_mut().push(Event::Dispatch);
        self.requests.borrow_mut().push(request);
        match self.behaviour.clone() {
            Behaviour::Dispatched => Ok(()),
            Behaviour::Fail(reason) => Err(TransportError::Network(reason.to_string())),
            Behaviour::Hang => std::future::pending().await,
            Behaviour::Delay(d) => {
                tokio::time::sleep(d).await;
                Ok(())
            }
        }
    }
}

struct TokioClock;

#[async_trait(?Send)]
impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 10, 15, 30).unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Default)]
struct RecordingSink(RefCell<Vec<AnalyticsEvent>>);

impl AnalyticsSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn track(&self, event: &AnalyticsEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

struct Harness {
    log: Log,
    view: RecordingView,
    transport: Rc<FakeTransport>,
    sink: Rc<RecordingSink>,
    pipeline: LeadPipeline<Rc<FakeTransport>, TokioClock>,
}

fn harness(variant: FormVariant, behaviour: Behaviour) -> Harness {
    let log: Log = Rc::default();
    let transport = Rc::new(FakeTransport::new(&log, behaviour));
    let sink = Rc::new(RecordingSink::default());
    let site = SiteConfig {
        endpoint_url: "https://intake.example/exec".to_string(),
        ..SiteConfig::default()
    };
    let pipeline = LeadPipeline::new(&site, variant, transport.clone(), TokioClock)
        .unwrap()
        .with_page("https://stay.example/")
        .with_analytics(Analytics::new().with_sink(sink.clone()));
    Harness {
        view: RecordingView::new(&log),
        log,
        transport,
        sink,
        pipeline,
    }
}

fn floating() -> FormVariant {
    SiteConfig::default().forms[0].clone()
}

fn events(h: &Harness) -> Vec<Event> {
    h.log.borrow().clone()
}

// =============================================================================
// success path
// =============================================================================

#[tokio::test(start_paused = true)]
async fn valid_lead_is_dispatched_and_form_cleared() {
    let h = harness(floating(), Behaviour::Dispatched);

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "98765-43210 "))
        .await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        events(&h),
        vec![
            Event::ClearMessages,
            Event::Busy(true),
            Event::Dispatch,
            Event::Success,
            Event::Reset,
            Event::Busy(false),
            Event::Dismiss(Duration::from_secs(6), false),
        ]
    );
    assert!(!h.view.busy.get());
    assert!(!h.pipeline.is_in_flight());
}

#[tokio::test(start_paused = true)]
async fn payload_carries_normalized_fields() {
    let h = harness(floating(), Behaviour::Dispatched);

    h.pipeline
        .submit(&h.view, LeadFields::new("  <Jo> ", "98765-43210 "))
        .await;

    let requests = h.transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "https://intake.example/exec");
    let DeliveryBody::Json(body) = &requests[0].body else {
        panic!("floating form sends json");
    };
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["name"], "&lt;Jo&gt;");
    assert_eq!(value["mobile"], "9876543210");
    assert_eq!(value["source"], "Floating Form");
    assert_eq!(value["page"], "https://stay.example/");
    assert_eq!(value["timestamp"], "17/10/2026, 3:45:30 pm");
}

#[tokio::test(start_paused = true)]
async fn form_encoded_variant_sends_fields() {
    let variant = FormVariant {
        encoding: PayloadEncoding::Form,
        ..floating()
    };
    let h = harness(variant, Behaviour::Dispatched);

    h.pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    let requests = h.transport.requests.borrow();
    let DeliveryBody::Form(fields) = &requests[0].body else {
        panic!("expected form fields");
    };
    assert!(fields.contains(&("mobile", "9876543210".to_string())));
}

#[tokio::test(start_paused = true)]
async fn success_emits_form_submission_with_source() {
    let h = harness(floating(), Behaviour::Dispatched);

    h.pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    let tracked = h.sink.0.borrow();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].name, EventName::FormSubmission);
    assert_eq!(tracked[0].source, "Floating Form");
}

#[tokio::test(start_paused = true)]
async fn success_without_analytics_sinks_still_succeeds() {
    let log: Log = Rc::default();
    let transport = Rc::new(FakeTransport::new(&log, Behaviour::Dispatched));
    let pipeline =
        LeadPipeline::new(&SiteConfig::default(), floating(), transport, TokioClock).unwrap();
    let view = RecordingView::new(&log);

    let outcome = pipeline
        .submit(&view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert_eq!(outcome, Outcome::Success);
}

#[tokio::test(start_paused = true)]
async fn modal_variant_closes_dialog_with_the_dismissal() {
    let modal = SiteConfig::default().forms[1].clone();
    let h = harness(modal, Behaviour::Dispatched);

    h.pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert_eq!(
        events(&h).last(),
        Some(&Event::Dismiss(Duration::from_secs(3), true))
    );
}

#[tokio::test(start_paused = true)]
async fn opaque_response_counts_as_success() {
    // Whatever the endpoint does with the lead, a request that leaves without a
    // transport error is all the pipeline can see.
    let h = harness(floating(), Behaviour::Dispatched);

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert!(outcome.is_success());
    assert_eq!(h.transport.requests.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_dispatch_within_bound_succeeds() {
    let h = harness(floating(), Behaviour::Delay(Duration::from_secs(9)));

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert_eq!(outcome, Outcome::Success);
}

// =============================================================================
// validation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn short_name_fails_before_mobile_and_never_dispatches() {
    let h = harness(floating(), Behaviour::Dispatched);

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("A", "12345"))
        .await;

    assert_eq!(outcome, Outcome::Invalid(ValidationError::NameTooShort));
    assert!(h.transport.requests.borrow().is_empty());
    assert_eq!(
        events(&h),
        vec![
            Event::ClearMessages,
            Event::Invalid(ValidationError::NameTooShort)
        ]
    );
    assert!(h.sink.0.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn bad_mobile_never_dispatches() {
    let h = harness(floating(), Behaviour::Dispatched);

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "98765 4321"))
        .await;

    assert_eq!(outcome, Outcome::Invalid(ValidationError::InvalidMobile));
    assert!(h.transport.requests.borrow().is_empty());
    assert!(!h.view.busy.get());
}

#[tokio::test(start_paused = true)]
async fn alert_variant_reports_through_the_view() {
    let variant = FormVariant {
        feedback: FeedbackStyle::Alert,
        collect_email: true,
        ..floating()
    };
    let h = harness(variant, Behaviour::Dispatched);

    let outcome = h
        .pipeline
        .submit(
            &h.view,
            LeadFields::new("Jo", "9876543210").with_email("jo@nowhere"),
        )
        .await;

    assert_eq!(outcome, Outcome::Invalid(ValidationError::InvalidEmail));
    assert!(events(&h).contains(&Event::Invalid(ValidationError::InvalidEmail)));
}

// =============================================================================
// delivery failures
// =============================================================================

#[tokio::test(start_paused = true)]
async fn hung_dispatch_times_out_with_connectivity_message() {
    let h = harness(floating(), Behaviour::Hang);
    let started = tokio::time::Instant::now();

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert_eq!(outcome, Outcome::DeliveryFailed(DeliveryError::Timeout));
    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(10) && waited < Duration::from_secs(11));
    assert_eq!(
        events(&h),
        vec![
            Event::ClearMessages,
            Event::Busy(true),
            Event::Dispatch,
            Event::Error(
                "Request timed out. Please check your connection and try again.".to_string()
            ),
            Event::Busy(false),
        ]
    );
    assert!(h.sink.0.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn variant_timeout_override_is_enforced() {
    let viewing = SiteConfig::default().forms[3].clone();
    let h = harness(viewing, Behaviour::Delay(Duration::from_secs(4)));
    let started = tokio::time::Instant::now();

    let outcome = h
        .pipeline
        .submit(
            &h.view,
            LeadFields::new("Jo", "9876543210").with_schedule("2026-10-20", "11:00"),
        )
        .await;

    assert_eq!(outcome, Outcome::DeliveryFailed(DeliveryError::Timeout));
    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(3) && waited < Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn transport_failure_is_generic_and_keeps_fields() {
    let h = harness(floating(), Behaviour::Fail("connection refused"));

    let outcome = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert_eq!(
        outcome,
        Outcome::DeliveryFailed(DeliveryError::Transport(
            "network error: connection refused".to_string()
        ))
    );
    let log = events(&h);
    assert!(!log.contains(&Event::Reset));
    assert!(log.contains(&Event::Error(
        "There was an error submitting the form. Please try again or contact us directly."
            .to_string()
    )));
    assert_eq!(log.last(), Some(&Event::Busy(false)));
}

#[test]
fn timeout_and_transport_messages_differ() {
    assert_ne!(
        DeliveryError::Timeout.to_string(),
        DeliveryError::Transport(String::new()).to_string()
    );
    assert!(DeliveryError::Timeout.to_string().contains("check your connection"));
}

// =============================================================================
// re-delivery safeguard
// =============================================================================

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_ignored() {
    let h = harness(floating(), Behaviour::Delay(Duration::from_secs(2)));

    let (first, second) = tokio::join!(
        h.pipeline
            .submit(&h.view, LeadFields::new("Jo", "9876543210")),
        h.pipeline
            .submit(&h.view, LeadFields::new("Jo", "9876543210")),
    );

    assert_eq!(first, Outcome::Success);
    assert_eq!(second, Outcome::Busy);
    assert_eq!(h.transport.requests.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn form_can_resubmit_after_failure() {
    let h = harness(floating(), Behaviour::Fail("offline"));

    h.pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;
    let again = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .await;

    assert!(matches!(again, Outcome::DeliveryFailed(_)));
    assert_eq!(h.transport.requests.borrow().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_an_in_flight_submission_re_enables_the_form() {
    let h = harness(floating(), Behaviour::Hang);

    let pending = h
        .pipeline
        .submit(&h.view, LeadFields::new("Jo", "9876543210"))
        .now_or_never();

    assert!(pending.is_none());
    assert!(!h.view.busy.get());
    assert!(!h.pipeline.is_in_flight());
    assert_eq!(events(&h).last(), Some(&Event::Busy(false)));
}
