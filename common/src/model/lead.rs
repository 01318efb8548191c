use serde::{Deserialize, Serialize};

/// Raw values read from a lead form at submit time.
///
/// Nothing here is trusted: the pipeline normalizes and validates every field
/// before a [`LeadSubmission`] is built from it. Fields a variant does not
/// render are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub date: String,
    pub time: String,
}

impl LeadFields {
    /// Shorthand for the two fields every variant collects.
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_schedule(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.date = date.into();
        self.time = time.into();
        self
    }
}

/// The payload delivered to the spreadsheet endpoint.
///
/// Built fresh for every submission attempt and dropped once the attempt
/// resolves; it is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Trimmed and markup-escaped.
    pub name: String,
    /// Exactly ten ASCII digits.
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Label of the form variant that produced the lead.
    pub source: String,
    /// Submission time in the configured regional timezone.
    pub timestamp: String,
    /// URL of the page the form lives on.
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl LeadSubmission {
    /// Field pairs for multipart / url-encoded delivery, in a stable order.
    /// Absent optional fields are omitted.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("mobile", self.mobile.clone()),
        ];
        if let Some(email) = &self.email {
            fields.push(("email", email.clone()));
        }
        if let Some(date) = &self.date {
            fields.push(("date", date.clone()));
        }
        if let Some(time) = &self.time {
            fields.push(("time", time.clone()));
        }
        fields.push(("source", self.source.clone()));
        fields.push(("timestamp", self.timestamp.clone()));
        fields.push(("page", self.page.clone()));
        fields
    }
}
