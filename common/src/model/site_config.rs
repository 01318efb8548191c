//! Site configuration shared by the host server and the browser application.
//!
//! The backend assembles a [`SiteConfig`] from its environment and serves it at
//! `/api/config`; the frontend fetches it once and hands an immutable copy to
//! every lead pipeline it builds. Nothing mutates it after that point.

use std::collections::HashSet;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT_ID/exec";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DISMISS_MS: u64 = 6_000;

const TIMEOUT_RANGE_MS: std::ops::RangeInclusive<u64> = 1_000..=60_000;
const DISMISS_RANGE_MS: std::ops::RangeInclusive<u64> = 1_000..=30_000;

/// How the payload is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    #[default]
    Json,
    /// Multipart form fields, as a browser `FormData` body.
    Form,
}

/// Where validation and delivery messages are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStyle {
    /// Message containers next to the form.
    #[default]
    Inline,
    /// Blocking `alert()` for validation errors.
    Alert,
}

/// One lead form on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormVariant {
    /// Label stamped on every lead and analytics event from this form.
    pub source: String,
    /// DOM id of the `<form>`; the ids of its fields and message containers
    /// are derived from it.
    pub form_id: String,
    pub encoding: PayloadEncoding,
    pub feedback: FeedbackStyle,
    pub in_modal: bool,
    pub collect_email: bool,
    pub collect_schedule: bool,
    pub submit_label: String,
    pub busy_label: String,
    pub timeout_ms: Option<u64>,
    pub dismiss_ms: Option<u64>,
}

impl Default for FormVariant {
    fn default() -> Self {
        Self {
            source: "Landing Page".to_string(),
            form_id: "contactForm".to_string(),
            encoding: PayloadEncoding::Json,
            feedback: FeedbackStyle::Inline,
            in_modal: false,
            collect_email: false,
            collect_schedule: false,
            submit_label: "SUBMIT".to_string(),
            busy_label: "SUBMITTING...".to_string(),
            timeout_ms: None,
            dismiss_ms: None,
        }
    }
}

impl FormVariant {
    pub fn field_id(&self, field: &str) -> String {
        format!("{}-{}", self.form_id, field)
    }

    pub fn success_id(&self) -> String {
        self.field_id("success")
    }

    pub fn error_id(&self) -> String {
        self.field_id("error")
    }

    pub fn submit_id(&self) -> String {
        self.field_id("submit")
    }
}

/// Everything a page needs to build its lead pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub endpoint_url: String,
    pub timeout_ms: u64,
    pub dismiss_ms: u64,
    /// IANA name used to render lead timestamps.
    pub timezone: String,
    /// Contact number shown in the page's call-to-action links.
    pub phone: String,
    pub forms: Vec<FormVariant>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            dismiss_ms: DEFAULT_DISMISS_MS,
            timezone: DEFAULT_TIMEZONE.to_string(),
            phone: "+919876543210".to_string(),
            forms: default_forms(),
        }
    }
}

fn default_forms() -> Vec<FormVariant> {
    vec![
        FormVariant {
            source: "Floating Form".to_string(),
            form_id: "floatingForm".to_string(),
            submit_label: "GET A CALLBACK".to_string(),
            timeout_ms: Some(10_000),
            dismiss_ms: Some(6_000),
            ..FormVariant::default()
        },
        FormVariant {
            source: "Enquiry Popup".to_string(),
            form_id: "modalForm".to_string(),
            in_modal: true,
            collect_email: true,
            submit_label: "SEND ENQUIRY".to_string(),
            timeout_ms: Some(8_000),
            dismiss_ms: Some(3_000),
            ..FormVariant::default()
        },
        FormVariant {
            source: "Brochure Download".to_string(),
            form_id: "brochureForm".to_string(),
            encoding: PayloadEncoding::Form,
            feedback: FeedbackStyle::Alert,
            collect_email: true,
            submit_label: "DOWNLOAD BROCHURE".to_string(),
            timeout_ms: Some(5_000),
            dismiss_ms: Some(4_000),
            ..FormVariant::default()
        },
        FormVariant {
            source: "Schedule Viewing".to_string(),
            form_id: "viewingForm".to_string(),
            in_modal: true,
            collect_schedule: true,
            submit_label: "BOOK A VIEWING".to_string(),
            busy_label: "BOOKING...".to_string(),
            timeout_ms: Some(3_000),
            dismiss_ms: Some(5_000),
            ..FormVariant::default()
        },
    ]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint url must start with http:// or https://, got {0:?}")]
    InvalidEndpoint(String),
    #[error("timeout of {0} ms is outside the accepted 1-60 s range")]
    TimeoutOutOfRange(u64),
    #[error("dismiss delay of {0} ms is outside the accepted 1-30 s range")]
    DismissOutOfRange(u64),
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("form id {0:?} is used more than once")]
    DuplicateFormId(String),
    #[error("form {0:?} has an empty source label")]
    EmptySource(String),
}

impl SiteConfig {
    /// Checks the invariants pipelines rely on. Per-variant overrides are held
    /// to the same ranges as the site defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint_url.starts_with("https://") || self.endpoint_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidEndpoint(self.endpoint_url.clone()));
        }
        check_timeout(self.timeout_ms)?;
        check_dismiss(self.dismiss_ms)?;
        self.tz()?;

        let mut seen = HashSet::new();
        for form in &self.forms {
            if !seen.insert(form.form_id.as_str()) {
                return Err(ConfigError::DuplicateFormId(form.form_id.clone()));
            }
            if form.source.trim().is_empty() {
                return Err(ConfigError::EmptySource(form.form_id.clone()));
            }
            if let Some(ms) = form.timeout_ms {
                check_timeout(ms)?;
            }
            if let Some(ms) = form.dismiss_ms {
                check_dismiss(ms)?;
            }
        }
        Ok(())
    }

    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))
    }

    pub fn form(&self, form_id: &str) -> Option<&FormVariant> {
        self.forms.iter().find(|f| f.form_id == form_id)
    }

    /// The delivery bound for `variant`, falling back to the site default.
    pub fn timeout_for(&self, variant: &FormVariant) -> Duration {
        Duration::from_millis(variant.timeout_ms.unwrap_or(self.timeout_ms))
    }

    /// How long the success indicator stays up for `variant`.
    pub fn dismiss_for(&self, variant: &FormVariant) -> Duration {
        Duration::from_millis(variant.dismiss_ms.unwrap_or(self.dismiss_ms))
    }
}

fn check_timeout(ms: u64) -> Result<(), ConfigError> {
    if TIMEOUT_RANGE_MS.contains(&ms) {
        Ok(())
    } else {
        Err(ConfigError::TimeoutOutOfRange(ms))
    }
}

fn check_dismiss(ms: u64) -> Result<(), ConfigError> {
    if DISMISS_RANGE_MS.contains(&ms) {
        Ok(())
    } else {
        Err(ConfigError::DismissOutOfRange(ms))
    }
}
