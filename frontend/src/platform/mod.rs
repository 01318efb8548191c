//! Browser implementations of the traits the lead pipeline is generic over.

pub mod analytics;
pub mod clock;
pub mod transport;

pub use analytics::{detect_analytics, AnalyticsHandle};
pub use clock::BrowserClock;
pub use transport::GlooTransport;

use common::pipeline::LeadPipeline;

/// The pipeline as wired up in the browser.
pub type BrowserPipeline = LeadPipeline<GlooTransport, BrowserClock>;

/// Current page URL, or an empty string outside a window context.
pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
