use chrono::{DateTime, FixedOffset};

use crate::structured_data::Params;

/// A field looked up by name on a [`Record`](crate::Record).
///
/// Borrowed from the record, so lookups never allocate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Time(&'a DateTime<FixedOffset>),
    Table(&'a Params),
}

impl<'a> FieldValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&'a DateTime<FixedOffset>> {
        match *self {
            FieldValue::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&'a Params> {
        match *self {
            FieldValue::Table(p) => Some(p),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "int",
            FieldValue::Time(_) => "time",
            FieldValue::Table(_) => "table",
        }
    }
}
