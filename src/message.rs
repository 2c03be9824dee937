//! In-memory representation of a single log record, in either wire format.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::header::Header;
use crate::legacy::LegacyRecord;
use crate::rfc5424::StructuredRecord;
use crate::value::FieldValue;
use crate::{Error, Facility, Severity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Legacy(LegacyRecord),
    Structured(StructuredRecord),
}

impl Record {
    pub fn header(&self) -> &Header {
        match self {
            Record::Legacy(r) => &r.header,
            Record::Structured(r) => &r.header,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Record::Legacy(r) => &r.message,
            Record::Structured(r) => &r.message,
        }
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.header().timestamp
    }

    pub fn facility(&self) -> u32 {
        self.header().priority.facility()
    }

    pub fn severity(&self) -> u32 {
        self.header().priority.severity()
    }

    pub fn facility_kind(&self) -> Result<Facility, Error> {
        self.header().priority.facility_kind()
    }

    pub fn severity_kind(&self) -> Severity {
        self.header().priority.severity_kind()
    }

    /// Looks up a field by its exact name, `None` if the record has no such
    /// field.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match self {
            Record::Legacy(r) => r.field(key),
            Record::Structured(r) => r.field(key),
        }
    }

    /// The canonical wire encoding of the record.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Record::Legacy(r) => r.bytes(),
            Record::Structured(r) => r.bytes(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Legacy(r) => fmt::Display::fmt(r, f),
            Record::Structured(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<LegacyRecord> for Record {
    fn from(r: LegacyRecord) -> Self {
        Record::Legacy(r)
    }
}

impl From<StructuredRecord> for Record {
    fn from(r: StructuredRecord) -> Self {
        Record::Structured(r)
    }
}
