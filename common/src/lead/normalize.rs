use crate::model::lead::LeadFields;

/// Length of an accepted mobile number, and the cap the input mask enforces.
pub const MOBILE_DIGITS: usize = 10;

/// Form input after trimming and cleanup, before validation.
///
/// `name_chars` is measured on the trimmed value *before* escaping, so a name
/// like `<` cannot pass the length check by growing into `&lt;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLead {
    pub name: String,
    pub name_chars: usize,
    /// Every digit of the phone field, untruncated.
    pub mobile: String,
    pub email: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl NormalizedLead {
    pub fn from_fields(fields: &LeadFields) -> Self {
        let name = fields.name.trim();
        Self {
            name: escape_html(name),
            name_chars: name.chars().count(),
            mobile: digits(&fields.mobile),
            email: non_empty(&fields.email).map(escape_html),
            date: non_empty(&fields.date).map(escape_html),
            time: non_empty(&fields.time).map(escape_html),
        }
    }
}

/// Escapes special HTML characters so free text is never interpreted as
/// markup: `&`, `<`, `>`, `"` and `'` become their entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The phone input mask: keeps ASCII digits only, at most [`MOBILE_DIGITS`]
/// of them. Applied on every keystroke and to pasted text alike.
pub fn mask_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MOBILE_DIGITS)
        .collect()
}

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
