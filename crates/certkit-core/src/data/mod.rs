//! Recipient data records
//!
//! A [`DataRecord`] is the flat set of values a certificate or badge is
//! personalised with. Records are looked up by an external service; the
//! engine only ever reads them while substituting placeholders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recipient's data, as supplied by the record source.
///
/// Every field is optional. Empty strings are treated the same as missing
/// values during substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataRecord {
    /// Record identifier used when requesting exports
    pub id: Option<String>,
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub ticket_type: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub designation: Option<String>,
    pub event_name: Option<String>,
    /// First day of the event
    pub event_start_date: Option<NaiveDate>,
    /// Last day of the event
    pub event_end_date: Option<NaiveDate>,
    pub issue_date: Option<String>,
}

impl DataRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_registration_number(mut self, value: impl Into<String>) -> Self {
        self.registration_number = Some(value.into());
        self
    }

    pub fn with_ticket_type(mut self, value: impl Into<String>) -> Self {
        self.ticket_type = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_institution(mut self, value: impl Into<String>) -> Self {
        self.institution = Some(value.into());
        self
    }

    pub fn with_event_name(mut self, value: impl Into<String>) -> Self {
        self.event_name = Some(value.into());
        self
    }

    /// Sets both ends of the event date range.
    pub fn with_event_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.event_start_date = Some(start);
        self.event_end_date = Some(end);
        self
    }

    /// Returns the value only if it is present and not blank.
    pub fn non_empty(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
    }
}
