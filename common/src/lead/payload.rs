use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::normalize::NormalizedLead;
use crate::model::lead::LeadSubmission;
use crate::model::site_config::PayloadEncoding;

/// The request body handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryBody {
    /// A serialized JSON object, sent as `application/json`.
    Json(String),
    /// Ordered field pairs, sent as a multipart form.
    Form(Vec<(&'static str, String)>),
}

impl DeliveryBody {
    pub fn encode(
        submission: &LeadSubmission,
        encoding: PayloadEncoding,
    ) -> Result<Self, serde_json::Error> {
        Ok(match encoding {
            PayloadEncoding::Json => DeliveryBody::Json(serde_json::to_string(submission)?),
            PayloadEncoding::Form => DeliveryBody::Form(submission.form_fields()),
        })
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            DeliveryBody::Json(_) => Some("application/json"),
            // The browser writes the multipart boundary header itself.
            DeliveryBody::Form(_) => None,
        }
    }
}

/// Renders `now` the way the en-IN locale prints a date-time, e.g.
/// `17/10/2026, 3:45:30 pm`.
pub fn format_timestamp(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz)
        .format("%d/%m/%Y, %-I:%M:%S %P")
        .to_string()
}

/// Assembles the wire payload from an already validated lead.
pub fn build_submission(
    lead: NormalizedLead,
    source: &str,
    page: &str,
    now: DateTime<Utc>,
    tz: Tz,
) -> LeadSubmission {
    LeadSubmission {
        name: lead.name,
        mobile: lead.mobile,
        email: lead.email,
        source: source.to_string(),
        timestamp: format_timestamp(now, tz),
        page: page.to_string(),
        date: lead.date,
        time: lead.time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lead::LeadFields;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, h, m, s).unwrap()
    }

    #[test]
    fn timestamp_uses_regional_timezone() {
        assert_eq!(
            format_timestamp(at(10, 15, 30), chrono_tz::Asia::Kolkata),
            "17/10/2026, 3:45:30 pm"
        );
        assert_eq!(
            format_timestamp(at(20, 0, 5), chrono_tz::Asia::Kolkata),
            "18/10/2026, 1:30:05 am"
        );
    }

    #[test]
    fn json_body_omits_absent_optionals() {
        let lead = NormalizedLead::from_fields(&LeadFields::new("Jo", "9876543210"));
        let submission = build_submission(
            lead,
            "Floating Form",
            "https://stay.example/",
            at(10, 15, 30),
            chrono_tz::Asia::Kolkata,
        );
        let DeliveryBody::Json(body) = DeliveryBody::encode(&submission, PayloadEncoding::Json)
            .unwrap()
        else {
            panic!("expected a json body");
        };
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["name"], "Jo");
        assert_eq!(value["mobile"], "9876543210");
        assert_eq!(value["source"], "Floating Form");
        assert_eq!(value["page"], "https://stay.example/");
        assert!(value.get("email").is_none());
        assert!(value.get("date").is_none());
    }

    #[test]
    fn form_body_keeps_stable_field_order() {
        let lead = NormalizedLead::from_fields(
            &LeadFields::new("Jo", "9876543210")
                .with_email("jo@example.in")
                .with_schedule("2026-10-20", "11:00"),
        );
        let submission = build_submission(
            lead,
            "Schedule Viewing",
            "https://stay.example/",
            at(10, 15, 30),
            chrono_tz::Asia::Kolkata,
        );
        let body = DeliveryBody::encode(&submission, PayloadEncoding::Form).unwrap();
        assert_eq!(body.content_type(), None);
        let DeliveryBody::Form(fields) = body else {
            panic!("expected form fields");
        };
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["name", "mobile", "email", "date", "time", "source", "timestamp", "page"]
        );
    }
}
