//! RFC 5424 records, carrying structured data.
//!
//! https://datatracker.ietf.org/doc/html/rfc5424#section-6

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::header::{name, Header, NILVALUE};
use crate::structured_data::{sd_name, Element, Params, StructuredData};
use crate::value::FieldValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredRecord {
    pub header: Header,
    // NOTE: param values are stored unescaped
    pub elements: StructuredData,
    pub message: String,
}

impl StructuredRecord {
    pub fn new(header: Header, message: impl Into<String>) -> Self {
        StructuredRecord {
            header,
            elements: StructuredData::new(),
            message: message.into(),
        }
    }

    /// Adds an element, replacing any element with the same id.
    pub fn with_element<I, K, V>(mut self, id: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Params>();
        self.elements.insert(id.into(), params);
        self
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.header.timestamp
    }

    /// Header names first, then SD-IDs. An element whose id collides with a
    /// header name can't be reached through this lookup.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        if key == name::MESSAGE {
            return Some(FieldValue::Str(&self.message));
        }

        self.header
            .field(key)
            .or_else(|| self.elements.get(key).map(FieldValue::Table))
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// `HEADER SP STRUCTURED-DATA [SP MSG]`
///
/// STRUCTURED-DATA is the NILVALUE when no element can be written, and MSG is
/// omitted when empty. Elements whose SD-ID is empty, or equal to one already
/// written once invalid characters are dropped, are skipped.
impl fmt::Display for StructuredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.header)?;

        let mut written: Vec<String> = Vec::with_capacity(self.elements.len());
        for (id, params) in &self.elements {
            let name = sd_name(id);
            if name.is_empty() {
                continue;
            }

            let name = name.to_string();
            if written.contains(&name) {
                continue;
            }

            write!(f, "{}", Element { id, params })?;
            written.push(name);
        }

        if written.is_empty() {
            f.write_str(NILVALUE)?;
        }

        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }

        Ok(())
    }
}
