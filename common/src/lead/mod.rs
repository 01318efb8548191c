//! Turning raw form input into a deliverable lead.
//!
//! - `normalize`: trimming, markup escaping and the phone mask.
//! - `validation`: the ordered, short-circuiting field checks.
//! - `payload`: timestamping and encoding a validated lead for the wire.

pub mod normalize;
pub mod payload;
pub mod validation;

pub use normalize::{escape_html, mask_phone, NormalizedLead, MOBILE_DIGITS};
pub use payload::{build_submission, format_timestamp, DeliveryBody};
pub use validation::{validate, Field, ValidationError};
