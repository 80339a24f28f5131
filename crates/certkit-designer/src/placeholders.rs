//! Placeholder substitution.
//!
//! Element content may contain `{{token}}` markers. [`substitute`] resolves
//! them against an optional [`DataRecord`] in a single left-to-right pass:
//! a resolved value is copied to the output verbatim and never re-scanned.
//! Missing or blank record fields resolve to a fixed sample so previews
//! never show an empty string or a raw marker.

use certkit_core::DataRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Label used for `{{event_date}}` when the record has no complete date range.
pub const EVENT_DATE_FALLBACK: &str = "Event Date";

/// The fixed set of substitutable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Name,
    RegistrationNumber,
    TicketType,
    Email,
    Phone,
    Institution,
    Designation,
    EventName,
    EventDate,
    IssueDate,
}

impl Token {
    pub const ALL: [Token; 10] = [
        Self::Name,
        Self::RegistrationNumber,
        Self::TicketType,
        Self::Email,
        Self::Phone,
        Self::Institution,
        Self::Designation,
        Self::EventName,
        Self::EventDate,
        Self::IssueDate,
    ];

    /// The identifier written between the braces.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RegistrationNumber => "registration_number",
            Self::TicketType => "ticket_type",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Institution => "institution",
            Self::Designation => "designation",
            Self::EventName => "event_name",
            Self::EventDate => "event_date",
            Self::IssueDate => "issue_date",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }

    /// Human readable field name, used for predefined field elements.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::RegistrationNumber => "Registration Number",
            Self::TicketType => "Ticket Type",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Institution => "Institution",
            Self::Designation => "Designation",
            Self::EventName => "Event Name",
            Self::EventDate => "Event Date",
            Self::IssueDate => "Issue Date",
        }
    }

    /// Preview value shown when the record does not supply one.
    pub fn sample(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::RegistrationNumber => "REG001",
            Self::TicketType => "General Admission",
            Self::Email => "john.doe@example.com",
            Self::Phone => "+1 555 0100",
            Self::Institution => "Example University",
            Self::Designation => "Participant",
            Self::EventName => "Annual Conference",
            Self::EventDate => EVENT_DATE_FALLBACK,
            Self::IssueDate => "January 1, 2025",
        }
    }

    /// The marker as it appears in content, e.g. `{{name}}`.
    pub fn marker(self) -> String {
        format!("{OPEN}{}{CLOSE}", self.key())
    }

    /// Resolves this token. Never returns an empty string.
    pub fn resolve(self, record: Option<&DataRecord>) -> String {
        let Some(record) = record else {
            return self.sample().to_string();
        };
        let field = match self {
            Self::Name => &record.name,
            Self::RegistrationNumber => &record.registration_number,
            Self::TicketType => &record.ticket_type,
            Self::Email => &record.email,
            Self::Phone => &record.phone,
            Self::Institution => &record.institution,
            Self::Designation => &record.designation,
            Self::EventName => &record.event_name,
            Self::IssueDate => &record.issue_date,
            Self::EventDate => {
                return match (record.event_start_date, record.event_end_date) {
                    (Some(start), Some(end)) => format_date_range(start, end),
                    _ => EVENT_DATE_FALLBACK.to_string(),
                };
            }
        };
        DataRecord::non_empty(field)
            .unwrap_or(self.sample())
            .to_string()
    }
}

/// Case transform applied to a whole string after substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Title,
}

impl TextCase {
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Title => "title",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Title => title_case(text),
        }
    }
}

impl std::str::FromStr for TextCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "upper" | "uppercase" => Ok(Self::Uppercase),
            "lower" | "lowercase" => Ok(Self::Lowercase),
            "title" => Ok(Self::Title),
            other => Err(format!("unknown text case '{other}'")),
        }
    }
}

/// Capitalizes the first character and every character following whitespace
/// or a period. Other characters keep their case, so `REG001` and
/// `McDonald` survive.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for ch in text.chars() {
        if capitalize_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        capitalize_next = ch.is_whitespace() || ch == '.';
    }
    out
}

/// Formats an event range in short US English form.
///
/// `Mar 3, 2025`, `Mar 3 – 5, 2025`, `Mar 30 – Apr 2, 2025`,
/// `Dec 30, 2024 – Jan 2, 2025`. A reversed range is swapped.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    if start == end {
        start.format("%b %-d, %Y").to_string()
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{} – {}, {}",
            start.format("%b %-d"),
            end.day(),
            end.year()
        )
    } else if start.year() == end.year() {
        format!(
            "{} – {}, {}",
            start.format("%b %-d"),
            end.format("%b %-d"),
            end.year()
        )
    } else {
        format!(
            "{} – {}",
            start.format("%b %-d, %Y"),
            end.format("%b %-d, %Y")
        )
    }
}

/// Replaces every known `{{token}}` in `content`.
///
/// Unknown tokens and unterminated markers are copied through unchanged.
/// Whitespace inside the braces is ignored (`{{ name }}`). A marker nested
/// in stray braces (`{{{name}}}`, `{{ {{name}}`) still resolves.
pub fn substitute(content: &str, record: Option<&DataRecord>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let marker = &rest[open..];
        let after_open = &marker[OPEN.len()..];
        let Some(close) = after_open.find(CLOSE) else {
            out.push_str(marker);
            return out;
        };
        match Token::from_key(after_open[..close].trim()) {
            Some(token) => {
                out.push_str(&token.resolve(record));
                rest = &after_open[close + CLOSE.len()..];
            }
            None => {
                // keep one brace and rescan, a real marker may start inside
                out.push('{');
                rest = &marker[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Substitutes placeholders and applies a case transform to the result.
pub fn render_text(content: &str, record: Option<&DataRecord>, case: TextCase) -> String {
    case.apply(&substitute(content, record))
}

/// Known tokens referenced by `content`, in order of first appearance.
pub fn tokens_in(content: &str) -> Vec<Token> {
    let mut found = Vec::new();
    let mut rest = content;
    while let Some(open) = rest.find(OPEN) {
        let after_open = &rest[open + OPEN.len()..];
        let Some(close) = after_open.find(CLOSE) else {
            break;
        };
        match Token::from_key(after_open[..close].trim()) {
            Some(token) => {
                if !found.contains(&token) {
                    found.push(token);
                }
                rest = &after_open[close + CLOSE.len()..];
            }
            None => rest = &rest[open + 1..],
        }
    }
    found
}
